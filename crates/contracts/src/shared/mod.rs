pub mod n11_error;
pub mod paging;
pub mod serde_helpers;
