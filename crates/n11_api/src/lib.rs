pub mod error;
pub mod n11_api_client;
pub mod shared;
pub mod soap;

pub use error::N11Error;
pub use n11_api_client::{ApiResponse, ApiResult, N11ApiClient};
