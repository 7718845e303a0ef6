// Файл: translations/mod.rs
// Перевод меток детекции для показа в интерфейсе.

pub mod models;

pub use models::DamageClass;

const DEFECT_SUFFIX: &str = "_defect";
const DEFECT_MARK: &str = " (дефект)";

/// `scratches` -> `Царапины`, `Scratches_DEFECT` -> `Scratches (дефект)`.
/// Неизвестные ключи возвращаются как есть.
pub fn translate_damage_label(label: &str) -> String {
    let (key, is_defect) = strip_defect_suffix(label);
    let base = DamageClass::from_key(key)
        .map(|class| class.ru_label())
        .unwrap_or(key);

    if is_defect {
        format!("{}{}", base, DEFECT_MARK)
    } else {
        base.to_string()
    }
}

// Суффикс сравнивается без учета регистра (ASCII)
fn strip_defect_suffix(label: &str) -> (&str, bool) {
    let split_at = label.len().saturating_sub(DEFECT_SUFFIX.len());
    match (label.get(..split_at), label.get(split_at..)) {
        (Some(key), Some(suffix)) if suffix.eq_ignore_ascii_case(DEFECT_SUFFIX) => (key, true),
        _ => (label, false),
    }
}
