// Файл: utils/text.rs
// Строковое представление JSON-значений для показа пользователю и query-параметров.

use serde_json::{Number, Value};

/// Приводит значение к строке так, как это сделал бы `String(x)` в UI:
/// строки без кавычек, `null` -> пустая строка, целые числа без `.0`.
/// Массивы склеиваются через запятую, объекты отдаются как JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // Порог экспоненциальной записи как у Number.prototype.toString
        Some(f) if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) => exponent_form(f),
        // 2^53: дальше f64 уже не хранит целые точно
        Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            format!("{}", f as i64)
        }
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// `1e21` -> `1e+21`, `1.5e-7` остается как есть
fn exponent_form(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(value_to_string(&json!("Обязательное поле")), "Обязательное поле");
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(-7)), "-7");
    }

    #[test]
    fn test_floats() {
        assert_eq!(value_to_string(&json!(1.5)), "1.5");
        assert_eq!(value_to_string(&json!(3.0)), "3");
    }

    #[test]
    fn test_extreme_floats_use_exponent() {
        assert_eq!(value_to_string(&json!(1e21)), "1e+21");
        assert_eq!(value_to_string(&json!(-2.5e30)), "-2.5e+30");
        assert_eq!(value_to_string(&json!(1e-7)), "1e-7");
        assert_eq!(value_to_string(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(value_to_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(value_to_string(&json!(0.000001)), "0.000001");
        assert_eq!(value_to_string(&json!(0.0)), "0");
    }

    #[test]
    fn test_containers() {
        assert_eq!(value_to_string(&json!([1, "a", null])), "1,a,");
        assert_eq!(value_to_string(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
