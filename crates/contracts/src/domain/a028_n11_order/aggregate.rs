use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::paging::PagingResult;
use crate::shared::serde_helpers::{
    i64_from_str, opt_f64_from_str, opt_object, opt_string, wrapped_list,
};

// ============================================================================
// Запросы OrderService
// ============================================================================

/// Фильтр для DetailedOrderList / OrderList (`searchData`). Все поля необязательны.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSearchData {
    #[serde(rename = "productId", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "buyerName", skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,

    #[serde(rename = "orderNumber", skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    #[serde(rename = "productSellerCode", skip_serializing_if = "Option::is_none")]
    pub product_seller_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<OrderPeriod>,

    #[serde(rename = "sortForUpdateDate", skip_serializing_if = "Option::is_none")]
    pub sort_for_update_date: Option<bool>,
}

impl OrderSearchData {
    pub fn for_period(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            period: Some(OrderPeriod {
                start_date,
                end_date,
            }),
            ..Default::default()
        }
    }
}

/// Период поиска заказов, даты в формате n11 (dd/MM/yyyy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPeriod {
    #[serde(rename = "startDate", with = "serde_date")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate", with = "serde_date")]
    pub end_date: NaiveDate,
}

/// Запрос OrderDetail (`orderRequest`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub id: i64,
}

// Local serde helper for NaiveDate as DD/MM/YYYY
mod serde_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.format(FORMAT).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Ответы OrderService
// ============================================================================

/// Заказ в ответах OrderList / DetailedOrderList
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    #[serde(deserialize_with = "i64_from_str")]
    pub id: i64,

    #[serde(rename = "orderNumber", default, deserialize_with = "opt_string")]
    pub order_number: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,

    #[serde(rename = "createDate", default, deserialize_with = "opt_string")]
    pub create_date: Option<String>,

    #[serde(rename = "paymentType", default, deserialize_with = "opt_string")]
    pub payment_type: Option<String>,

    #[serde(rename = "totalAmount", default, deserialize_with = "opt_f64_from_str")]
    pub total_amount: Option<f64>,
}

/// Ответ OrderList / DetailedOrderList
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(rename = "orderList", default, deserialize_with = "wrapped_list")]
    pub orders: Vec<OrderSummary>,

    #[serde(rename = "pagingData", default, deserialize_with = "opt_object")]
    pub paging: Option<PagingResult>,
}
