use serde::{Deserialize, Serialize};

/// Базовый адрес SOAP сервисов n11
pub const N11_DEFAULT_BASE_URL: &str = "https://api.n11.com/ws";

/// Пространство имён схем n11 (request/response элементы)
pub const N11_SCHEMA_NAMESPACE: &str = "http://www.n11.com/ws/schemas";

/// Группы SOAP сервисов n11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum N11Service {
    Category,
    City,
    Product,
    Order,
}

impl N11Service {
    /// Имя сервиса в URL (CategoryService, CityService, ...)
    pub fn service_name(&self) -> &'static str {
        match self {
            N11Service::Category => "CategoryService",
            N11Service::City => "CityService",
            N11Service::Product => "ProductService",
            N11Service::Order => "OrderService",
        }
    }

    /// Адрес WSDL описания сервиса
    pub fn wsdl_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.wsdl",
            base_url.trim_end_matches('/'),
            self.service_name()
        )
    }

    /// Адрес, на который отправляются SOAP запросы
    pub fn endpoint_url(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.service_name())
    }

    pub fn all() -> Vec<N11Service> {
        vec![
            N11Service::Category,
            N11Service::City,
            N11Service::Product,
            N11Service::Order,
        ]
    }
}

/// Удалённые операции n11, которые поддерживает клиент
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum N11Operation {
    GetTopLevelCategories,
    GetSubCategories,
    GetCities,
    GetProductList,
    GetProductBySellerCode,
    SaveProduct,
    DeleteProductBySellerCode,
    DetailedOrderList,
    OrderList,
    OrderDetail,
}

impl N11Operation {
    /// Сервис, в котором живёт операция
    pub fn service(&self) -> N11Service {
        match self {
            N11Operation::GetTopLevelCategories | N11Operation::GetSubCategories => {
                N11Service::Category
            }
            N11Operation::GetCities => N11Service::City,
            N11Operation::GetProductList
            | N11Operation::GetProductBySellerCode
            | N11Operation::SaveProduct
            | N11Operation::DeleteProductBySellerCode => N11Service::Product,
            N11Operation::DetailedOrderList
            | N11Operation::OrderList
            | N11Operation::OrderDetail => N11Service::Order,
        }
    }

    /// Имя операции так, как оно описано в WSDL
    pub fn name(&self) -> &'static str {
        match self {
            N11Operation::GetTopLevelCategories => "GetTopLevelCategories",
            N11Operation::GetSubCategories => "GetSubCategories",
            N11Operation::GetCities => "GetCities",
            N11Operation::GetProductList => "GetProductList",
            N11Operation::GetProductBySellerCode => "GetProductBySellerCode",
            N11Operation::SaveProduct => "SaveProduct",
            N11Operation::DeleteProductBySellerCode => "DeleteProductBySellerCode",
            N11Operation::DetailedOrderList => "DetailedOrderList",
            N11Operation::OrderList => "OrderList",
            N11Operation::OrderDetail => "OrderDetail",
        }
    }

    /// Корневой элемент тела запроса
    pub fn request_element(&self) -> String {
        format!("{}Request", self.name())
    }

    /// Корневой элемент тела ответа
    pub fn response_element(&self) -> String {
        format!("{}Response", self.name())
    }
}

impl std::fmt::Display for N11Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_urls() {
        assert_eq!(
            N11Service::Category.wsdl_url(N11_DEFAULT_BASE_URL),
            "https://api.n11.com/ws/CategoryService.wsdl"
        );
        assert_eq!(
            N11Service::Order.endpoint_url("http://127.0.0.1:8080/ws/"),
            "http://127.0.0.1:8080/ws/OrderService/"
        );

        let endpoints: Vec<String> = N11Service::all()
            .iter()
            .map(|service| service.endpoint_url(N11_DEFAULT_BASE_URL))
            .collect();
        assert_eq!(
            endpoints,
            vec![
                "https://api.n11.com/ws/CategoryService/",
                "https://api.n11.com/ws/CityService/",
                "https://api.n11.com/ws/ProductService/",
                "https://api.n11.com/ws/OrderService/",
            ]
        );
    }

    #[test]
    fn test_operation_service_mapping() {
        assert_eq!(N11Operation::GetCities.service(), N11Service::City);
        assert_eq!(N11Operation::GetSubCategories.service(), N11Service::Category);
        assert_eq!(N11Operation::DeleteProductBySellerCode.service(), N11Service::Product);
        assert_eq!(N11Operation::OrderDetail.service(), N11Service::Order);
        assert_eq!(
            N11Operation::GetTopLevelCategories.request_element(),
            "GetTopLevelCategoriesRequest"
        );
    }
}
