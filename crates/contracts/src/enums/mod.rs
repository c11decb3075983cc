pub mod n11_result_status;
pub mod n11_service;
