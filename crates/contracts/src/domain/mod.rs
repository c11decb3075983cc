pub mod a025_connection_n11;
pub mod a026_n11_reference;
pub mod a027_n11_product;
pub mod a028_n11_order;
