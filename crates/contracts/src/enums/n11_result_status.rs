use serde::{Deserialize, Serialize};

/// Статус выполнения операции из блока `result` ответа n11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum N11ResultStatus {
    Success,
    Failure,
}

impl N11ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            N11ResultStatus::Success => "success",
            N11ResultStatus::Failure => "failure",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "success" => Some(N11ResultStatus::Success),
            "failure" => Some(N11ResultStatus::Failure),
            _ => None,
        }
    }
}
