use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::envelope::build_request_envelope;
use super::parser::parse_response;
use super::{SoapCall, SoapTransport};
use crate::error::N11Error;

/// HTTP-клиент для SOAP сервисов n11
pub struct HttpSoapTransport {
    client: reqwest::Client,
}

impl HttpSoapTransport {
    pub fn new(timeout: Duration) -> Result<Self, N11Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Транспорт с готовым reqwest клиентом (прокси, свои заголовки и т.п.)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SoapTransport for HttpSoapTransport {
    async fn call(&self, call: &SoapCall) -> Result<Value, N11Error> {
        let body = build_request_envelope(call.operation, &call.params)?;

        tracing::debug!("n11 SOAP request: POST {} ({})", call.endpoint, call.operation);

        let response = self
            .client
            .post(&call.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "\"\"")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let preview: String = text.chars().take(500).collect::<String>();
        let preview = if preview.len() < text.len() {
            format!("{}...", preview)
        } else {
            preview
        };
        tracing::debug!("n11 SOAP response {}: {}", status, preview);

        // SOAP 1.1 отдаёт Fault вместе с HTTP 500, поэтому сначала разбираем тело
        match parse_response(&text) {
            Err(fault @ N11Error::SoapFault { .. }) => {
                tracing::error!("n11 SOAP fault for {}: {}", call.operation, fault);
                Err(fault)
            }
            _ if !status.is_success() => {
                tracing::error!("n11 SOAP request failed with status {}: {}", status, preview);
                Err(N11Error::Http {
                    status: status.as_u16(),
                    body: preview,
                })
            }
            Ok(parsed) => {
                let expected = call.operation.response_element();
                if parsed.element != expected {
                    tracing::warn!(
                        "n11 SOAP: expected <{}>, got <{}>",
                        expected,
                        parsed.element
                    );
                }
                Ok(parsed.body)
            }
            Err(e) => {
                tracing::error!("Failed to parse n11 SOAP response. Error: {}", e);
                tracing::error!("Response body: {}", preview);
                Err(e)
            }
        }
    }
}
