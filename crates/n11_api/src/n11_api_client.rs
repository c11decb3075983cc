use contracts::domain::a025_connection_n11::aggregate::ConnectionN11;
use contracts::domain::a026_n11_reference::aggregate::{
    Category, City, CityList, SubCategories, TopLevelCategories,
};
use contracts::domain::a027_n11_product::aggregate::{ProductInfo, ProductPage, ProductRequest};
use contracts::domain::a028_n11_order::aggregate::{OrderPage, OrderRequest, OrderSearchData};
use contracts::enums::n11_result_status::N11ResultStatus;
use contracts::enums::n11_service::{N11Operation, N11_DEFAULT_BASE_URL};
use contracts::shared::n11_error::ErrorRecord;
use contracts::shared::paging::PagingData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::N11Error;
use crate::shared::config::N11Config;
use crate::soap::{HttpSoapTransport, ParamMap, SoapCall, SoapTransport};

/// Файл для отладочного лога запросов (режим `debug`)
pub const N11_REQUEST_LOG: &str = "n11_api_requests.log";

// ============================================================================
// Результат вызова
// ============================================================================

/// Итог операции n11: данные или бизнес-ошибка из блока `result`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(ErrorRecord),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(record) => Some(record),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Failure(record) => ApiResult::Failure(record),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorRecord> {
        match self {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Failure(record) => Err(record),
        }
    }
}

/// Ответ операции: исходный конверт без изменений и разобранный результат
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub operation: N11Operation,
    pub envelope: Value,
    pub result: ApiResult<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }

    /// `result.status` из конверта
    pub fn status(&self) -> Option<N11ResultStatus> {
        self.envelope
            .pointer("/result/status")
            .and_then(Value::as_str)
            .and_then(N11ResultStatus::from_code)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            operation: self.operation,
            envelope: self.envelope,
            result: self.result.map(f),
        }
    }
}

/// Прочитать блок `result`: при `status = failure` вернуть детали ошибки
pub fn error_from_envelope(envelope: &Value) -> Option<ErrorRecord> {
    let result = envelope.get("result")?;
    let status = result.get("status").and_then(Value::as_str)?;
    if N11ResultStatus::from_code(status) != Some(N11ResultStatus::Failure) {
        return None;
    }

    let text = |key: &str| result.get(key).and_then(Value::as_str).map(str::to_string);
    Some(ErrorRecord::new(
        text("errorCode").unwrap_or_default(),
        text("errorMessage").unwrap_or_default(),
        text("errorCategory"),
    ))
}

// ============================================================================
// Клиент
// ============================================================================

/// Клиент n11 Seller API.
///
/// Каждая операция собирает новую карту параметров (блок `auth` + свои
/// аргументы), вызывает одну удалённую операцию и проверяет `result.status`.
/// Бизнес-ошибки не являются `Err`: они приходят в `ApiResult::Failure`
/// и запоминаются как последняя ошибка (`last_error`).
/// Операции принимают `&mut self`, один экземпляр обслуживает один вызов за раз.
pub struct N11ApiClient<T: SoapTransport = HttpSoapTransport> {
    connection: ConnectionN11,
    base_url: String,
    debug: bool,
    log_file: PathBuf,
    transport: T,
    last_error: Option<ErrorRecord>,
    last_request: Option<ParamMap>,
}

impl N11ApiClient<HttpSoapTransport> {
    /// Клиент с адресом n11 по умолчанию и таймаутом 30 секунд
    pub fn new(connection: ConnectionN11) -> Result<Self, N11Error> {
        Self::from_config(&N11Config::from_connection(&connection))
    }

    pub fn from_config(config: &N11Config) -> Result<Self, N11Error> {
        let transport = HttpSoapTransport::new(config.timeout())?;
        Ok(Self::with_transport(config.connection(), transport)?
            .with_base_url(config.base_url.clone())
            .with_debug(config.debug))
    }
}

impl<T: SoapTransport> N11ApiClient<T> {
    pub fn with_transport(connection: ConnectionN11, transport: T) -> Result<Self, N11Error> {
        connection.validate().map_err(N11Error::Config)?;
        Ok(Self {
            connection,
            base_url: N11_DEFAULT_BASE_URL.to_string(),
            debug: false,
            log_file: PathBuf::from(N11_REQUEST_LOG),
            transport,
            last_error: None,
            last_request: None,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn connection(&self) -> &ConnectionN11 {
        &self.connection
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ------------------------------------------------------------------------
    // CategoryService
    // ------------------------------------------------------------------------

    /// Категории верхнего уровня
    pub async fn get_top_level_categories(
        &mut self,
    ) -> Result<ApiResponse<Vec<Category>>, N11Error> {
        let response = self
            .invoke::<TopLevelCategories>(N11Operation::GetTopLevelCategories, ParamMap::new())
            .await?;
        Ok(response.map(|payload| payload.categories))
    }

    /// Дочерние категории для `category_id`
    pub async fn get_sub_categories(
        &mut self,
        category_id: i64,
    ) -> Result<ApiResponse<SubCategories>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("categoryId".into(), Value::from(category_id));
        self.invoke(N11Operation::GetSubCategories, args).await
    }

    // ------------------------------------------------------------------------
    // CityService
    // ------------------------------------------------------------------------

    pub async fn get_cities(&mut self) -> Result<ApiResponse<Vec<City>>, N11Error> {
        let response = self
            .invoke::<CityList>(N11Operation::GetCities, ParamMap::new())
            .await?;
        Ok(response.map(|payload| payload.cities))
    }

    // ------------------------------------------------------------------------
    // ProductService
    // ------------------------------------------------------------------------

    /// Список товаров продавца постранично
    pub async fn get_product_list(
        &mut self,
        items_per_page: u32,
        current_page: u32,
    ) -> Result<ApiResponse<ProductPage>, N11Error> {
        if items_per_page == 0 || current_page == 0 {
            return Err(N11Error::InvalidArgument(format!(
                "itemsPerPage and currentPage must be positive (got {} and {})",
                items_per_page, current_page
            )));
        }

        let paging = PagingData {
            items_per_page,
            current_page,
        };
        let mut args = ParamMap::new();
        args.insert("pagingData".into(), to_param(&paging)?);
        self.invoke(N11Operation::GetProductList, args).await
    }

    /// Товар по коду продавца, который передавался при SaveProduct
    pub async fn get_product_by_seller_code(
        &mut self,
        seller_code: &str,
    ) -> Result<ApiResponse<ProductInfo>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("sellerCode".into(), Value::from(seller_code));
        self.invoke(N11Operation::GetProductBySellerCode, args).await
    }

    /// Создать или обновить товар
    pub async fn save_product(
        &mut self,
        product: &ProductRequest,
    ) -> Result<ApiResponse<ProductInfo>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("product".into(), to_param(product)?);
        self.invoke(N11Operation::SaveProduct, args).await
    }

    pub async fn delete_product_by_seller_code(
        &mut self,
        seller_code: &str,
    ) -> Result<ApiResponse<()>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("productSellerCode".into(), Value::from(seller_code));
        let response = self
            .invoke::<Value>(N11Operation::DeleteProductBySellerCode, args)
            .await?;
        Ok(response.map(|_| ()))
    }

    // ------------------------------------------------------------------------
    // OrderService
    // ------------------------------------------------------------------------

    /// Список заказов с подробной информацией
    pub async fn detailed_order_list(
        &mut self,
        search: &OrderSearchData,
    ) -> Result<ApiResponse<OrderPage>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("searchData".into(), to_param(search)?);
        self.invoke(N11Operation::DetailedOrderList, args).await
    }

    /// Список заказов, краткая информация
    pub async fn order_list(
        &mut self,
        search: &OrderSearchData,
    ) -> Result<ApiResponse<OrderPage>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("searchData".into(), to_param(search)?);
        self.invoke(N11Operation::OrderList, args).await
    }

    /// Детали заказа по id. Структура ответа отдаётся как есть.
    pub async fn order_detail(
        &mut self,
        request: &OrderRequest,
    ) -> Result<ApiResponse<Value>, N11Error> {
        let mut args = ParamMap::new();
        args.insert("orderRequest".into(), to_param(request)?);
        self.invoke(N11Operation::OrderDetail, args).await
    }

    // ------------------------------------------------------------------------
    // Проверка подключения и ошибки
    // ------------------------------------------------------------------------

    /// Проверить appKey/appSecret запросом категорий верхнего уровня.
    ///
    /// `false` только если последняя ошибка - ошибка аутентификации.
    /// Прочие бизнес-ошибки на результат не влияют, ошибки транспорта
    /// возвращаются как `Err`.
    pub async fn check_connection(&mut self) -> Result<bool, N11Error> {
        self.invoke::<Value>(N11Operation::GetTopLevelCategories, ParamMap::new())
            .await?;
        Ok(!self.last_error().is_auth_failure())
    }

    /// Последняя бизнес-ошибка или заглушка `{code: "0", message: "", category: None}`
    pub fn last_error(&self) -> ErrorRecord {
        self.last_error.clone().unwrap_or_else(ErrorRecord::no_error)
    }

    /// Параметры последнего отправленного запроса (с настоящим appSecret)
    pub fn last_request(&self) -> Option<&ParamMap> {
        self.last_request.as_ref()
    }

    /// Проверить конверт ответа. При `status = failure` ошибка запоминается,
    /// успешный ответ предыдущую ошибку не сбрасывает.
    pub fn inspect_response(&mut self, envelope: &Value) -> Option<ErrorRecord> {
        let status = envelope.pointer("/result/status").and_then(Value::as_str);
        if status.is_none() {
            tracing::warn!("n11 response has no result.status, treating as success");
        }

        let record = error_from_envelope(envelope)?;
        tracing::warn!("n11 API returned failure: {}", record);
        self.last_error = Some(record.clone());
        Some(record)
    }

    // ------------------------------------------------------------------------
    // Внутреннее
    // ------------------------------------------------------------------------

    /// Новая карта параметров: `auth` первым, затем аргументы операции
    fn build_params(&self, args: ParamMap) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert(
            "auth".into(),
            serde_json::json!({
                "appKey": self.connection.app_key,
                "appSecret": self.connection.app_secret,
            }),
        );
        for (key, value) in args {
            if key != "auth" {
                params.insert(key, value);
            }
        }
        params
    }

    async fn invoke<P: DeserializeOwned>(
        &mut self,
        operation: N11Operation,
        args: ParamMap,
    ) -> Result<ApiResponse<P>, N11Error> {
        let call = SoapCall {
            endpoint: operation.service().endpoint_url(&self.base_url),
            operation,
            params: self.build_params(args),
        };

        tracing::info!("n11 API: {} -> {}", operation, call.endpoint);
        if self.debug {
            self.trace_request(&call);
        }
        self.last_request = Some(call.params.clone());

        let envelope = match self.transport.call(&call).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!("n11 API {} failed: {}", operation, e);
                if self.debug {
                    self.log_to_file(&format!("ERROR {}: {}", operation, e));
                }
                return Err(e);
            }
        };

        let result = match self.inspect_response(&envelope) {
            Some(record) => ApiResult::Failure(record),
            None => ApiResult::Success(decode_payload::<P>(operation, &envelope)?),
        };

        if self.debug {
            self.log_to_file(&format!(
                "Response {}: {}",
                operation,
                match &result {
                    ApiResult::Success(_) => "success".to_string(),
                    ApiResult::Failure(record) => format!("failure {}", record),
                }
            ));
        }

        Ok(ApiResponse {
            operation,
            envelope,
            result,
        })
    }

    fn trace_request(&self, call: &SoapCall) {
        let params = serde_json::to_string_pretty(&masked_params(&call.params))
            .unwrap_or_default();
        tracing::debug!("n11 API {} params: {}", call.operation, params);
        self.log_to_file(&format!(
            "=== REQUEST ===\nPOST {}\nOperation: {}\nParams: {}",
            call.endpoint, call.operation, params
        ));
    }

    /// Записать в лог-файл
    fn log_to_file(&self, message: &str) {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
        {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, message);
        }
    }
}

/// Копия параметров для логов: appSecret заменён звёздочками
pub fn masked_params(params: &ParamMap) -> ParamMap {
    let mut masked = params.clone();
    if let Some(Value::Object(auth)) = masked.get_mut("auth") {
        if auth.contains_key("appSecret") {
            auth.insert("appSecret".into(), Value::from("****"));
        }
    }
    masked
}

fn to_param<S: Serialize + ?Sized>(value: &S) -> Result<Value, N11Error> {
    serde_json::to_value(value).map_err(|e| N11Error::InvalidArgument(e.to_string()))
}

/// Тело ответа без блока `result` -> типизированные данные операции
fn decode_payload<P: DeserializeOwned>(
    operation: N11Operation,
    envelope: &Value,
) -> Result<P, N11Error> {
    let mut payload = match envelope {
        Value::Object(map) => map.clone(),
        _ => ParamMap::new(),
    };
    payload.remove("result");

    serde_json::from_value(Value::Object(payload)).map_err(|e| {
        tracing::error!("Failed to decode n11 {} payload: {}", operation, e);
        N11Error::Decode {
            message: format!("{}: {}", operation, e),
            envelope: envelope.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a028_n11_order::aggregate::OrderPeriod;
    use contracts::enums::n11_service::N11Service;
    use contracts::shared::n11_error::N11_AUTH_FAILED;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Транспорт с заранее заданными ответами; запоминает каждый вызов
    #[derive(Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<Value, N11Error>>>,
        calls: Mutex<Vec<SoapCall>>,
    }

    impl ScriptedTransport {
        fn with_responses(responses: Vec<Result<Value, N11Error>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<SoapCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SoapTransport for ScriptedTransport {
        async fn call(&self, call: &SoapCall) -> Result<Value, N11Error> {
            self.calls.lock().unwrap().push(call.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(success()))
        }
    }

    fn success() -> Value {
        json!({"result": {"status": "success"}})
    }

    fn failure(code: &str, message: &str, category: &str) -> Value {
        json!({"result": {
            "status": "failure",
            "errorCode": code,
            "errorMessage": message,
            "errorCategory": category
        }})
    }

    fn client(responses: Vec<Result<Value, N11Error>>) -> N11ApiClient<ScriptedTransport> {
        N11ApiClient::with_transport(
            ConnectionN11::new("app-key", "app-secret"),
            ScriptedTransport::with_responses(responses),
        )
        .unwrap()
    }

    fn auth_block() -> Value {
        json!({"appKey": "app-key", "appSecret": "app-secret"})
    }

    #[test]
    fn test_rejects_empty_credentials() {
        let result = N11ApiClient::with_transport(
            ConnectionN11::new("", "secret"),
            ScriptedTransport::default(),
        );
        assert!(matches!(result, Err(N11Error::Config(_))));
    }

    #[test]
    fn test_last_error_sentinel_before_any_failure() {
        let client = client(vec![]);
        assert_eq!(
            client.last_error(),
            ErrorRecord {
                code: "0".into(),
                message: String::new(),
                category: None
            }
        );
    }

    #[tokio::test]
    async fn test_auth_block_on_every_operation() {
        let mut client = client(vec![]);
        let search = OrderSearchData::default();

        client.get_top_level_categories().await.unwrap();
        client.get_sub_categories(1000000).await.unwrap();
        client.get_cities().await.unwrap();
        client.get_product_list(20, 1).await.unwrap();
        client.get_product_by_seller_code("PI-1").await.unwrap();
        client
            .save_product(&ProductRequest::new("PI-1", "Deneme", 1000000, 2.0))
            .await
            .unwrap();
        client.delete_product_by_seller_code("PI-1").await.unwrap();
        client.detailed_order_list(&search).await.unwrap();
        client.order_list(&search).await.unwrap();
        client.order_detail(&OrderRequest { id: 42 }).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 10);
        for call in &calls {
            let (first_key, first_value) = call.params.iter().next().unwrap();
            assert_eq!(first_key, "auth", "{}", call.operation);
            assert_eq!(first_value, &auth_block(), "{}", call.operation);
        }
    }

    #[tokio::test]
    async fn test_endpoint_selected_by_service() {
        let mut client = client(vec![]).with_base_url("http://localhost:9000/ws");

        client.get_cities().await.unwrap();
        client.order_list(&OrderSearchData::default()).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].endpoint, "http://localhost:9000/ws/CityService/");
        assert_eq!(calls[0].operation, N11Operation::GetCities);
        assert_eq!(
            calls[1].endpoint,
            N11Service::Order.endpoint_url("http://localhost:9000/ws")
        );
    }

    #[tokio::test]
    async fn test_sub_categories_params() {
        let mut client = client(vec![]);
        client.get_sub_categories(1000000).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(
            Value::Object(calls[0].params.clone()),
            json!({"auth": auth_block(), "categoryId": 1000000})
        );
    }

    #[tokio::test]
    async fn test_product_list_paging_params() {
        let mut client = client(vec![]);
        client.get_product_list(20, 1).await.unwrap();

        let params = client.last_request().unwrap();
        assert_eq!(
            params.get("pagingData"),
            Some(&json!({"itemsPerPage": 20, "currentPage": 1}))
        );
        assert_eq!(params.get("auth"), Some(&auth_block()));
    }

    #[tokio::test]
    async fn test_product_list_rejects_zero_paging() {
        let mut client = client(vec![]);
        let err = client.get_product_list(0, 1).await.unwrap_err();
        assert!(matches!(err, N11Error::InvalidArgument(_)));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_params_do_not_leak_between_calls() {
        let mut client = client(vec![]);
        client.get_sub_categories(1000000).await.unwrap();
        client.get_cities().await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(Value::Object(calls[1].params.clone()), json!({"auth": auth_block()}));
    }

    #[tokio::test]
    async fn test_operation_specific_keys() {
        let mut client = client(vec![]);
        let search = OrderSearchData {
            buyer_name: Some("Ali".into()),
            period: Some(OrderPeriod {
                start_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            }),
            ..Default::default()
        };

        client.delete_product_by_seller_code("PI-7").await.unwrap();
        client.detailed_order_list(&search).await.unwrap();
        client.order_detail(&OrderRequest { id: 987 }).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls[0].params.get("productSellerCode"), Some(&json!("PI-7")));
        assert_eq!(
            calls[1].params.get("searchData"),
            Some(&json!({
                "buyerName": "Ali",
                "period": {"startDate": "01/03/2024", "endDate": "31/03/2024"}
            }))
        );
        assert_eq!(calls[2].params.get("orderRequest"), Some(&json!({"id": 987})));
    }

    #[tokio::test]
    async fn test_failure_is_recorded_exactly() {
        let mut client = client(vec![Ok(failure(
            "SELLER_API.categoryNotFound",
            "Kategori bulunamadı",
            "SELLER_API",
        ))]);

        let response = client.get_sub_categories(1).await.unwrap();

        let expected = ErrorRecord::new(
            "SELLER_API.categoryNotFound",
            "Kategori bulunamadı",
            Some("SELLER_API".into()),
        );
        assert_eq!(response.result, ApiResult::Failure(expected.clone()));
        assert_eq!(response.status(), Some(N11ResultStatus::Failure));
        assert_eq!(client.last_error(), expected);
    }

    #[tokio::test]
    async fn test_success_keeps_previous_error() {
        let mut client = client(vec![
            Ok(failure("SELLER_API.productNotFound", "Ürün bulunamadı", "SELLER_API")),
            Ok(success()),
        ]);

        client.get_product_by_seller_code("missing").await.unwrap();
        let response = client.get_cities().await.unwrap();

        assert!(response.is_success());
        assert_eq!(client.last_error().code, "SELLER_API.productNotFound");
    }

    #[tokio::test]
    async fn test_envelope_returned_unchanged() {
        let envelope = json!({
            "result": {"status": "success"},
            "categoryList": {"category": [
                {"id": "1000000", "name": "Bilgisayar"},
                {"id": "1000476", "name": "Elektronik"}
            ]}
        });
        let mut client = client(vec![Ok(envelope.clone())]);

        let response = client.get_top_level_categories().await.unwrap();

        assert_eq!(response.envelope, envelope);
        let categories = response.result.into_result().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, 1000000);
    }

    #[tokio::test]
    async fn test_cities_success_leaves_sentinel() {
        let mut client = client(vec![Ok(json!({
            "result": {"status": "success"},
            "cities": {"city": {"cityCode": "34", "cityId": "3401", "cityName": "İstanbul"}}
        }))]);

        let response = client.get_cities().await.unwrap();

        assert_eq!(response.result.clone().into_result().unwrap()[0].city_id, 3401);
        assert!(client.last_error().is_no_error());
    }

    #[tokio::test]
    async fn test_check_connection_with_invalid_credentials() {
        let mut client = client(vec![Ok(failure(
            N11_AUTH_FAILED,
            "Authentication failed",
            "SELLER_API",
        ))]);

        assert!(!client.check_connection().await.unwrap());
        assert_eq!(client.last_error().code, N11_AUTH_FAILED);
        assert_eq!(
            client.transport().calls()[0].operation,
            N11Operation::GetTopLevelCategories
        );
    }

    #[tokio::test]
    async fn test_check_connection_ignores_other_errors() {
        let mut client = client(vec![
            Ok(failure("SELLER_API.serviceUnavailable", "Servis kullanılamıyor", "SELLER_API")),
            Ok(success()),
        ]);

        assert!(client.check_connection().await.unwrap());
        assert!(client.check_connection().await.unwrap());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut client = client(vec![Err(N11Error::Network("connect: refused".into()))]);

        let err = client.check_connection().await.unwrap_err();

        assert!(err.is_transport());
        assert!(client.last_error().is_no_error());
    }

    #[tokio::test]
    async fn test_payload_mismatch_keeps_envelope() {
        let envelope = json!({
            "result": {"status": "success"},
            "product": {"title": "no id"}
        });
        let mut client = client(vec![Ok(envelope.clone())]);

        let err = client.get_product_by_seller_code("PI-1").await.unwrap_err();
        match err {
            N11Error::Decode {
                message,
                envelope: returned,
            } => {
                assert!(message.starts_with("GetProductBySellerCode"));
                assert_eq!(returned, envelope);
            }
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_product_list_with_empty_elements() {
        let envelope = json!({
            "result": {"status": "success"},
            "products": "",
            "pagingData": ""
        });
        let mut client = client(vec![Ok(envelope.clone())]);

        let response = client.get_product_list(20, 1).await.unwrap();

        assert_eq!(response.envelope, envelope);
        assert_eq!(response.result, ApiResult::Success(ProductPage::default()));
    }

    #[tokio::test]
    async fn test_product_not_found_returns_empty_info() {
        let mut client = client(vec![Ok(json!({
            "result": {"status": "success"},
            "product": ""
        }))]);

        let response = client.get_product_by_seller_code("PI-1").await.unwrap();
        assert_eq!(response.result, ApiResult::Success(ProductInfo { product: None }));
    }

    #[tokio::test]
    async fn test_debug_log_masks_secret() {
        let log_file = std::env::temp_dir().join(format!(
            "n11_api_requests_{}.log",
            std::process::id()
        ));
        std::fs::remove_file(&log_file).ok();
        let mut client = client(vec![])
            .with_debug(true)
            .with_log_file(&log_file);

        client.get_sub_categories(1000000).await.unwrap();

        let contents = std::fs::read_to_string(&log_file).unwrap();
        std::fs::remove_file(&log_file).ok();
        assert!(contents.contains("GetSubCategories"));
        assert!(contents.contains("\"appSecret\": \"****\""));
        assert!(contents.contains("1000000"));
        assert!(!contents.contains("app-secret"));
        assert!(contents.contains("Response GetSubCategories: success"));
    }

    #[test]
    fn test_inspect_response_without_status() {
        let mut client = client(vec![]);
        assert_eq!(client.inspect_response(&json!({"foo": "bar"})), None);
        assert!(client.last_error().is_no_error());
    }

    #[test]
    fn test_masked_params() {
        let client = client(vec![]);
        let params = client.build_params(ParamMap::new());
        let masked = masked_params(&params);
        assert_eq!(masked["auth"]["appSecret"], json!("****"));
        assert_eq!(masked["auth"]["appKey"], json!("app-key"));
        assert_eq!(params["auth"]["appSecret"], json!("app-secret"));
    }
}
