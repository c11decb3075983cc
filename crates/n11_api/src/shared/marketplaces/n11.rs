use async_trait::async_trait;
use contracts::domain::a025_connection_n11::aggregate::ConnectionN11;

use super::{MarketplaceClient, TestConnectionResult};
use crate::error::N11Error;
use crate::n11_api_client::N11ApiClient;
use crate::soap::SoapTransport;

/// Клиент для работы с API n11
pub struct N11Client;

#[async_trait]
impl MarketplaceClient for N11Client {
    async fn test_connection(connection: &ConnectionN11) -> TestConnectionResult {
        if let Err(e) = connection.validate() {
            return TestConnectionResult {
                success: false,
                message: "Не указаны ключи API n11".into(),
                details: Some(e),
            };
        }

        let mut client = match N11ApiClient::new(connection.clone()) {
            Ok(c) => c,
            Err(e) => {
                return TestConnectionResult {
                    success: false,
                    message: "Ошибка создания HTTP клиента".into(),
                    details: Some(e.to_string()),
                }
            }
        };

        test_connection_with(&mut client).await
    }
}

/// Проверка подключения через уже созданный клиент
pub async fn test_connection_with<T: SoapTransport>(
    client: &mut N11ApiClient<T>,
) -> TestConnectionResult {
    match client.check_connection().await {
        Ok(true) => {
            let last_error = client.last_error();
            if last_error.is_no_error() {
                TestConnectionResult {
                    success: true,
                    message: "Подключение к n11 успешно установлено".into(),
                    details: Some("appKey и appSecret валидны".into()),
                }
            } else {
                // Ключи приняты, но последний вызов вернул другую ошибку
                TestConnectionResult {
                    success: true,
                    message: "Подключение к n11 установлено".into(),
                    details: Some(format!("Последняя ошибка n11: {}", last_error)),
                }
            }
        }
        Ok(false) => TestConnectionResult {
            success: false,
            message: "n11 отклонил appKey/appSecret".into(),
            details: Some(client.last_error().to_string()),
        },
        Err(e) => {
            let message = match &e {
                N11Error::Network(_) => "Не удалось установить соединение с n11 API",
                N11Error::Http { .. } => "n11 API вернул ошибку HTTP",
                N11Error::SoapFault { .. } => "n11 API вернул SOAP Fault",
                _ => "Некорректный ответ от n11 API",
            };
            TestConnectionResult {
                success: false,
                message: message.into(),
                details: Some(format!("URL: {}, Ошибка: {}", client.base_url(), e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::SoapCall;
    use contracts::shared::n11_error::N11_AUTH_FAILED;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct OneShotTransport {
        response: Mutex<Option<Result<Value, N11Error>>>,
    }

    #[async_trait]
    impl SoapTransport for OneShotTransport {
        async fn call(&self, _call: &SoapCall) -> Result<Value, N11Error> {
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(json!({"result": {"status": "success"}})))
        }
    }

    fn client(response: Result<Value, N11Error>) -> N11ApiClient<OneShotTransport> {
        N11ApiClient::with_transport(
            ConnectionN11::new("key", "secret"),
            OneShotTransport {
                response: Mutex::new(Some(response)),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_success() {
        let mut client = client(Ok(json!({"result": {"status": "success"}})));
        let result = test_connection_with(&mut client).await;
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_auth_failure() {
        let mut client = client(Ok(json!({"result": {
            "status": "failure",
            "errorCode": N11_AUTH_FAILED,
            "errorMessage": "Authentication failed",
            "errorCategory": "SELLER_API"
        }})));
        let result = test_connection_with(&mut client).await;
        assert!(!result.success);
        assert!(result.details.unwrap().contains(N11_AUTH_FAILED));
    }

    #[tokio::test]
    async fn test_network_error() {
        let mut client = client(Err(N11Error::Network("connect: refused".into())));
        let result = test_connection_with(&mut client).await;
        assert!(!result.success);
        assert_eq!(result.message, "Не удалось установить соединение с n11 API");
    }

    #[tokio::test]
    async fn test_empty_credentials() {
        let result = N11Client::test_connection(&ConnectionN11::new("", "")).await;
        assert!(!result.success);
    }
}
