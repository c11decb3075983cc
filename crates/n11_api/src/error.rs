use serde_json::Value;
use thiserror::Error;

/// Ошибки клиента n11, при которых ответ от сервиса получить не удалось.
///
/// Бизнес-ошибки (status = failure) сюда не попадают: они возвращаются
/// в `ApiResult::Failure` и сохраняются как последняя ошибка клиента.
#[derive(Debug, Error)]
pub enum N11Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("SOAP fault {code}: {message}")]
    SoapFault { code: String, message: String },

    #[error("Malformed SOAP response: {0}")]
    Xml(String),

    /// Ответ успешный, но данные не совпали с ожидаемой структурой.
    /// Исходный конверт ответа сохраняется в `envelope`.
    #[error("Failed to decode response payload: {message}")]
    Decode { message: String, envelope: Value },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl N11Error {
    /// Ошибка на уровне транспорта (сеть, HTTP, SOAP, XML)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            N11Error::Network(_) | N11Error::Http { .. } | N11Error::SoapFault { .. } | N11Error::Xml(_)
        )
    }
}

impl From<reqwest::Error> for N11Error {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connect"
        } else if e.is_request() {
            "request"
        } else {
            "transport"
        };
        N11Error::Network(format!("{}: {}", kind, e))
    }
}
