use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{i64_from_str, one_or_many, opt_string, wrapped_list};

// ============================================================================
// Категории
// ============================================================================

/// Категория n11
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "i64_from_str")]
    pub id: i64,
    pub name: String,
}

/// Ответ GetTopLevelCategories (без блока result)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopLevelCategories {
    #[serde(rename = "categoryList", default, deserialize_with = "wrapped_list")]
    pub categories: Vec<Category>,
}

/// Категория вместе с дочерними категориями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(deserialize_with = "i64_from_str")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "subCategoryList", default, deserialize_with = "wrapped_list")]
    pub sub_categories: Vec<Category>,
}

/// Ответ GetSubCategories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubCategories {
    #[serde(rename = "category", default, deserialize_with = "one_or_many")]
    pub categories: Vec<CategoryNode>,
}

impl SubCategories {
    /// Все дочерние категории одним списком
    pub fn children(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .flat_map(|node| node.sub_categories.iter())
            .collect()
    }
}

// ============================================================================
// Города
// ============================================================================

/// Город из справочника n11
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "cityId", deserialize_with = "i64_from_str")]
    pub city_id: i64,

    #[serde(rename = "cityCode", default, deserialize_with = "opt_string")]
    pub city_code: Option<String>,

    #[serde(rename = "cityName")]
    pub city_name: String,
}

/// Ответ GetCities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityList {
    #[serde(rename = "cities", default, deserialize_with = "wrapped_list")]
    pub cities: Vec<City>,
}
