use serde::{Deserialize, Serialize};

use crate::shared::paging::PagingResult;
use crate::shared::serde_helpers::{
    i64_from_str, opt_f64_from_str, opt_object, opt_string, wrapped_list,
};

// ============================================================================
// SaveProduct: структура товара, как её ждёт ProductService
// ============================================================================

/// Товар для SaveProduct.
///
/// Порядок полей совпадает с порядком элементов в схеме n11,
/// т.к. SOAP сервис проверяет последовательность элементов.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    #[serde(rename = "productSellerCode")]
    pub product_seller_code: String,

    pub title: String,

    pub subtitle: String,

    pub description: String,

    pub attributes: ProductAttributes,

    pub category: ProductCategoryRef,

    pub price: f64,

    #[serde(rename = "currencyType")]
    pub currency_type: String,

    pub images: ProductImages,

    #[serde(rename = "saleStartDate")]
    pub sale_start_date: String,

    #[serde(rename = "saleEndDate")]
    pub sale_end_date: String,

    #[serde(rename = "productionDate")]
    pub production_date: String,

    #[serde(rename = "expirationDate")]
    pub expiration_date: String,

    /// 1 - новый, 2 - б/у
    #[serde(rename = "productCondition")]
    pub product_condition: String,

    /// Срок подготовки к отправке, дней
    #[serde(rename = "preparingDay")]
    pub preparing_day: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    #[serde(rename = "shipmentTemplate")]
    pub shipment_template: String,

    #[serde(rename = "stockItems")]
    pub stock_items: StockItems,
}

impl ProductRequest {
    /// Минимальный товар: код продавца, название, категория, цена. Валюта TL, новый товар.
    pub fn new(
        product_seller_code: impl Into<String>,
        title: impl Into<String>,
        category_id: i64,
        price: f64,
    ) -> Self {
        Self {
            product_seller_code: product_seller_code.into(),
            title: title.into(),
            category: ProductCategoryRef { id: category_id },
            price,
            currency_type: "TL".to_string(),
            product_condition: "1".to_string(),
            preparing_day: 3,
            ..Default::default()
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        let order = self.images.image.len() as u32 + 1;
        self.images.image.push(ProductImage {
            url: url.into(),
            order,
        });
        self
    }

    pub fn with_stock_item(mut self, item: StockItem) -> Self {
        self.stock_items.stock_item.push(item);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    #[serde(default)]
    pub attribute: Vec<ProductAttribute>,
}

/// Атрибут товара (name/value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategoryRef {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImages {
    #[serde(default)]
    pub image: Vec<ProductImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockItems {
    #[serde(rename = "stockItem", default)]
    pub stock_item: Vec<StockItem>,
}

/// Складская позиция (вариант товара)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub quantity: u32,

    #[serde(rename = "sellerStockCode")]
    pub seller_stock_code: String,

    pub attributes: ProductAttributes,

    #[serde(rename = "optionPrice")]
    pub option_price: f64,
}

// ============================================================================
// Ответы ProductService
// ============================================================================

/// Товар в ответах GetProductList / GetProductBySellerCode / SaveProduct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(deserialize_with = "i64_from_str")]
    pub id: i64,

    #[serde(rename = "productSellerCode", default, deserialize_with = "opt_string")]
    pub product_seller_code: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub subtitle: Option<String>,

    #[serde(default, deserialize_with = "opt_f64_from_str")]
    pub price: Option<f64>,

    #[serde(rename = "displayPrice", default, deserialize_with = "opt_f64_from_str")]
    pub display_price: Option<f64>,

    #[serde(rename = "currencyType", default, deserialize_with = "opt_string")]
    pub currency_type: Option<String>,

    #[serde(rename = "approvalStatus", default, deserialize_with = "opt_string")]
    pub approval_status: Option<String>,

    #[serde(rename = "saleStatus", default, deserialize_with = "opt_string")]
    pub sale_status: Option<String>,
}

/// Ответ GetProductBySellerCode и SaveProduct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    #[serde(default, deserialize_with = "opt_object")]
    pub product: Option<ProductSummary>,
}

/// Ответ GetProductList
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "wrapped_list")]
    pub products: Vec<ProductSummary>,

    #[serde(rename = "pagingData", default, deserialize_with = "opt_object")]
    pub paging: Option<PagingResult>,
}
