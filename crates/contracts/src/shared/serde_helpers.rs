//! Десериализаторы для ответов n11.
//!
//! Ответ SOAP приходит как XML, поэтому после конвертации в JSON все листья
//! являются строками, список из одного элемента выглядит как объект, а пустой
//! список как пустая строка.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// `<list><item/>...</list>` -> Vec<T>. Обёртка с одним ключом, внутри объект или массив.
pub fn wrapped_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => match map.into_iter().next() {
            Some((_, inner)) => values_to_vec(inner),
            None => Ok(Vec::new()),
        },
        Value::Array(items) => collect_items(items),
        Value::Null | Value::String(_) => Ok(Vec::new()),
        other => Err(de::Error::custom(format!(
            "expected list wrapper, got {}",
            other
        ))),
    }
}

/// Элемент, который может встретиться один или несколько раз
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    values_to_vec(Value::deserialize(deserializer)?)
}

fn values_to_vec<T, E>(value: Value) -> Result<Vec<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    match value {
        Value::Array(items) => collect_items(items),
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        single => serde_json::from_value(single)
            .map(|item| vec![item])
            .map_err(E::custom),
    }
}

fn collect_items<T, E>(items: Vec<Value>) -> Result<Vec<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(E::custom))
        .collect()
}

/// Десериализует целое число из строки или числа
pub fn i64_from_str<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_i64_from_str(deserializer)?.ok_or_else(|| de::Error::custom("expected integer, got empty value"))
}

/// Десериализует целое число из строки или числа в Option<i64>
pub fn opt_i64_from_str<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected integer, got {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(de::Error::custom),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(de::Error::custom(format!("expected integer, got {}", other))),
    }
}

/// Десериализует цену из строки или числа в Option<f64>
pub fn opt_f64_from_str<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(de::Error::custom),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(de::Error::custom(format!("expected number, got {}", other))),
    }
}

/// Вложенный блок, который может прийти пустым элементом `<x/>` ("") или nil
pub fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::Null) | None => Ok(None),
        Some(other) => serde_json::from_value(other).map(Some).map_err(de::Error::custom),
    }
}

/// Пустой элемент `<x/>` приходит как "", превращаем в None
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(de::Error::custom(format!("expected text, got {}", other))),
    }
}
