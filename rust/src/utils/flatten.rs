// Файл: utils/flatten.rs
// Разворачивание вложенного JSON в плоскую карту "путь -> лист".

use serde_json::{Map, Value};

/// Ключ, под которым кладется строка верхнего уровня.
pub const TOP_LEVEL_STRING_KEY: &str = "obj";

/// Плоская карта: ключ-путь вида `a[b][0]` -> скалярное значение.
/// Порядок ключей совпадает с порядком обхода.
pub type FlatMap = Map<String, Value>;

/// Разворачивает значение без родительского префикса.
///
/// - `{"a": {"b": 1}}` -> `{"a[b]": 1}`
/// - `{"a": [1, 2]}` -> `{"a[0]": 1, "a[1]": 2}`
/// - `"hello"` -> `{"obj": "hello"}`
///
/// Не падает: числа, bool и null верхнего уровня дают пустую карту.
pub fn flatten_object(value: &Value) -> FlatMap {
    flatten_with_parent(value, "")
}

/// То же, но все ключи строятся от `parent_key`.
/// Пустой `parent_key` означает отсутствие префикса.
pub fn flatten_with_parent(value: &Value, parent_key: &str) -> FlatMap {
    let mut result = FlatMap::new();

    if let (Value::String(s), "") = (value, parent_key) {
        result.insert(TOP_LEVEL_STRING_KEY.to_string(), Value::String(s.clone()));
        return result;
    }

    flatten_into(value, parent_key, &mut result);
    result
}

fn flatten_into(value: &Value, parent_key: &str, result: &mut FlatMap) {
    match value {
        Value::Object(map) => {
            for (key, child) in ordered_entries(map) {
                visit_entry(key, child, parent_key, result);
            }
        }
        // Массив обходится как объект с ключами-индексами
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                visit_entry(&index.to_string(), child, parent_key, result);
            }
        }
        scalar => {
            if !parent_key.is_empty() {
                result.insert(parent_key.to_string(), scalar.clone());
            }
        }
    }
}

/// Порядок обхода ключей как у for-in: сначала индексы массива
/// (`"0"`, `"7"`, ...) по возрастанию, затем строки в порядке вставки.
fn ordered_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    // sort_by_key стабилен: строковые ключи сохраняют исходный порядок
    entries.sort_by_key(|(key, _)| match array_index(key) {
        Some(index) => (0, index),
        None => (1, 0),
    });
    entries
}

// Канонический индекс: без ведущих нулей и меньше 2^32 - 1
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index < u32::MAX)
}

fn visit_entry(key: &str, child: &Value, parent_key: &str, result: &mut FlatMap) {
    let new_key = if parent_key.is_empty() {
        key.to_string()
    } else {
        format!("{}[{}]", parent_key, key)
    };

    match child {
        Value::Object(_) => flatten_into(child, &new_key, result),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let array_key = format!("{}[{}]", new_key, index);
                match item {
                    Value::Object(_) | Value::Array(_) => flatten_into(item, &array_key, result),
                    leaf => {
                        result.insert(array_key, leaf.clone());
                    }
                }
            }
        }
        // Коллизии ключей: побеждает последняя запись
        leaf => {
            result.insert(new_key, leaf.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(map: &FlatMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_nested_object() {
        let flat = flatten_object(&json!({"a": {"b": 1, "c": 2}}));
        assert_eq!(Value::Object(flat), json!({"a[b]": 1, "a[c]": 2}));
    }

    #[test]
    fn test_array_of_scalars() {
        let flat = flatten_object(&json!({"a": [1, 2]}));
        assert_eq!(Value::Object(flat), json!({"a[0]": 1, "a[1]": 2}));
    }

    #[test]
    fn test_array_of_objects() {
        let flat = flatten_object(&json!({"a": [{"b": 1}]}));
        assert_eq!(Value::Object(flat), json!({"a[0][b]": 1}));
    }

    #[test]
    fn test_nested_arrays() {
        let flat = flatten_object(&json!({"m": [[1, 2], [3]]}));
        assert_eq!(
            Value::Object(flat),
            json!({"m[0][0]": 1, "m[0][1]": 2, "m[1][0]": 3})
        );
    }

    #[test]
    fn test_top_level_string() {
        let flat = flatten_object(&json!("hello"));
        assert_eq!(Value::Object(flat), json!({"obj": "hello"}));
    }

    #[test]
    fn test_top_level_non_string_scalars_are_empty() {
        assert!(flatten_object(&json!(5)).is_empty());
        assert!(flatten_object(&json!(true)).is_empty());
        assert!(flatten_object(&Value::Null).is_empty());
    }

    #[test]
    fn test_top_level_array_uses_indexes() {
        let flat = flatten_object(&json!(["first", {"x": "second"}]));
        assert_eq!(Value::Object(flat), json!({"0": "first", "1[x]": "second"}));
    }

    #[test]
    fn test_null_leaf_is_kept() {
        let flat = flatten_object(&json!({"a": null, "b": [null]}));
        assert_eq!(Value::Object(flat), json!({"a": null, "b[0]": null}));
    }

    #[test]
    fn test_already_flat_is_unchanged() {
        let input = json!({"email": "bad", "age": 3, "ok": false});
        let flat = flatten_object(&input);
        assert_eq!(Value::Object(flat), input);
    }

    #[test]
    fn test_traversal_order_is_kept() {
        let input: Value =
            serde_json::from_str(r#"{"z": 1, "a": {"y": 2, "b": 3}, "m": [4]}"#).unwrap();
        let flat = flatten_object(&input);
        assert_eq!(keys(&flat), vec!["z", "a[y]", "a[b]", "m[0]"]);
    }

    #[test]
    fn test_integer_like_keys_are_visited_first() {
        let input: Value =
            serde_json::from_str(r#"{"b": 1, "10": 2, "a": 3, "2": 4, "01": 5}"#).unwrap();
        let flat = flatten_object(&input);
        assert_eq!(keys(&flat), vec!["2", "10", "b", "a", "01"]);

        let input: Value = serde_json::from_str(r#"{"x": {"name": 1, "0": 2}}"#).unwrap();
        let flat = flatten_object(&input);
        assert_eq!(keys(&flat), vec!["x[0]", "x[name]"]);
    }

    #[test]
    fn test_collision_last_write_wins() {
        let input: Value = serde_json::from_str(r#"{"a[b]": 1, "a": {"b": 2}}"#).unwrap();
        let flat = flatten_object(&input);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a[b]"], json!(2));
    }

    #[test]
    fn test_parent_prefix() {
        let flat = flatten_with_parent(&json!({"b": [1]}), "root");
        assert_eq!(Value::Object(flat), json!({"root[b][0]": 1}));

        let flat = flatten_with_parent(&json!("text"), "root");
        assert_eq!(Value::Object(flat), json!({"root": "text"}));
    }

    #[test]
    fn test_empty_containers() {
        assert!(flatten_object(&json!({})).is_empty());
        assert!(flatten_object(&json!({"a": {}, "b": []})).is_empty());
    }
}
