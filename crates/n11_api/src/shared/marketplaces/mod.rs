pub mod n11;

use async_trait::async_trait;
use contracts::domain::a025_connection_n11::aggregate::ConnectionN11;

/// Результат тестирования подключения к маркетплейсу
#[derive(Debug, Clone)]
pub struct TestConnectionResult {
    pub success: bool,
    pub message: String,
    pub details: Option<String>,
}

/// Трейт для клиента маркетплейса
#[async_trait]
pub trait MarketplaceClient {
    /// Тестирование подключения к маркетплейсу
    async fn test_connection(connection: &ConnectionN11) -> TestConnectionResult;
}
