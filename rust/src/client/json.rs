// Файл: client/json.rs
// Разбор и сериализация JSON с логированием контекста.

use super::error::CoreError;
use serde::{de::DeserializeOwned, Serialize};

/// Разбирает тело ответа.
/// `context` попадает только в лог (например, "GET /api/images").
pub fn parse_json_from_text<T: DeserializeOwned>(
    response_text: &str,
    context: &str,
) -> Result<T, CoreError> {
    serde_json::from_str(response_text).map_err(|e| {
        log::warn!("Failed to parse JSON for {}: {}", context, e);
        CoreError::from(e)
    })
}

/// Сериализует значение в JSON-строку (тела запросов, FFI).
pub fn to_json_text<T: Serialize + ?Sized>(value: &T, context: &str) -> Result<String, CoreError> {
    serde_json::to_string(value).map_err(|e| {
        log::warn!("Failed to serialize JSON for {}: {}", context, e);
        CoreError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Detection {
        id: i32,
        label: String,
    }

    #[test]
    fn test_parse_json_success() {
        let json = r#"{"id": 1, "label": "scratches"}"#;
        let result = parse_json_from_text::<Detection>(json, "test_success").unwrap();
        assert_eq!(
            result,
            Detection {
                id: 1,
                label: "scratches".to_string()
            }
        );
    }

    #[test]
    fn test_parse_json_error() {
        let json = r#"{id: 1, label: "scratches"}"#;
        let result = parse_json_from_text::<Detection>(json, "test_error");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_to_json_text() {
        let text = to_json_text(&serde_json::json!({"a": [1, 2]}), "test").unwrap();
        assert_eq!(text, r#"{"a":[1,2]}"#);
    }
}
