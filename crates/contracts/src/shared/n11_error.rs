use serde::{Deserialize, Serialize};

/// Код ошибки n11 при неверных appKey/appSecret
pub const N11_AUTH_FAILED: &str = "SELLER_API.authenticationFailed";

/// Код "ошибки нет"
pub const N11_NO_ERROR: &str = "0";

/// Детали последней бизнес-ошибки, которую вернул n11 в блоке `result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub code: String,
    pub message: String,
    pub category: Option<String>,
}

impl ErrorRecord {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category,
        }
    }

    /// Запись-заглушка, когда ни один вызов ещё не завершился ошибкой
    pub fn no_error() -> Self {
        Self {
            code: N11_NO_ERROR.to_string(),
            message: String::new(),
            category: None,
        }
    }

    pub fn is_no_error(&self) -> bool {
        self.code == N11_NO_ERROR
    }

    pub fn is_auth_failure(&self) -> bool {
        self.code == N11_AUTH_FAILED
    }
}

impl Default for ErrorRecord {
    fn default() -> Self {
        Self::no_error()
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.category {
            Some(category) => write!(f, "[{}] {} ({})", self.code, self.message, category),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_error_sentinel() {
        let record = ErrorRecord::default();
        assert_eq!(record.code, "0");
        assert_eq!(record.message, "");
        assert_eq!(record.category, None);
        assert!(record.is_no_error());
        assert!(!record.is_auth_failure());
    }

    #[test]
    fn test_display() {
        let record = ErrorRecord::new(
            N11_AUTH_FAILED,
            "Authentication failed",
            Some("SELLER_API".to_string()),
        );
        assert!(record.is_auth_failure());
        assert_eq!(
            record.to_string(),
            "[SELLER_API.authenticationFailed] Authentication failed (SELLER_API)"
        );
    }
}
