//! SOAP транспорт для сервисов n11.
//!
//! - [`SoapTransport`]: вызов одной удалённой операции, на выходе тело ответа
//! - [`HttpSoapTransport`]: реализация поверх `reqwest`
//! - [`envelope`]: сборка XML запроса из карты параметров
//! - [`parser`]: разбор XML ответа и SOAP Fault

pub mod envelope;
pub mod http;
pub mod parser;

use async_trait::async_trait;
use contracts::enums::n11_service::N11Operation;
use serde_json::{Map, Value};

use crate::error::N11Error;

pub use http::HttpSoapTransport;

/// Параметры вызова в порядке элементов запроса
pub type ParamMap = Map<String, Value>;

/// Один вызов удалённой операции
#[derive(Debug, Clone, PartialEq)]
pub struct SoapCall {
    /// Адрес сервиса, например `https://api.n11.com/ws/CityService/`
    pub endpoint: String,
    pub operation: N11Operation,
    pub params: ParamMap,
}

/// Трейт для SOAP транспорта
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Выполнить вызов и вернуть содержимое элемента `{Operation}Response`.
    ///
    /// Ошибки сети, HTTP, SOAP Fault и битый XML возвращаются как `Err`.
    /// Бизнес-ошибка (`result.status = failure`) ошибкой транспорта не является.
    async fn call(&self, call: &SoapCall) -> Result<Value, N11Error>;
}
