use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Подключение к n11: ключи API продавца.
///
/// Сериализуется ровно в блок `auth` запроса (`appKey`, `appSecret`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionN11 {
    #[serde(rename = "appKey")]
    pub app_key: String,

    #[serde(rename = "appSecret")]
    pub app_secret: String,
}

impl ConnectionN11 {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Проверка обязательных полей
    pub fn validate(&self) -> Result<(), String> {
        if self.app_key.trim().is_empty() {
            return Err("appKey is required for n11 API".into());
        }
        if self.app_secret.trim().is_empty() {
            return Err("appSecret is required for n11 API".into());
        }
        Ok(())
    }

    /// Ключ для логов: первые символы и звёздочки
    pub fn masked_key(&self) -> String {
        let visible: String = self.app_key.chars().take(4).collect();
        format!("{}****", visible)
    }
}

// appSecret не должен попадать в логи через {:?}
impl std::fmt::Debug for ConnectionN11 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionN11")
            .field("app_key", &self.masked_key())
            .field("app_secret", &"****")
            .finish()
    }
}
