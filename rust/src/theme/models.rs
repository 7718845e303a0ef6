// Файл: theme/models.rs
// Модели конфигурации UI-фреймворка: темы и настройки компонентов по умолчанию.

use serde::Serialize;
use std::collections::BTreeMap;

/// Значение CSS-переменной темы: строка (`8px`, `#000`) или число (прозрачность).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeVariable {
    Text(String),
    Number(f64),
}

impl From<&str> for ThemeVariable {
    fn from(value: &str) -> Self {
        ThemeVariable::Text(value.to_string())
    }
}

impl From<f64> for ThemeVariable {
    fn from(value: f64) -> Self {
        ThemeVariable::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDefinition {
    pub dark: bool,
    pub colors: BTreeMap<String, String>,
    pub variables: BTreeMap<String, ThemeVariable>,
}

impl ThemeDefinition {
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn variable(&self, name: &str) -> Option<&ThemeVariable> {
        self.variables.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub default_theme: String,
    pub themes: BTreeMap<String, ThemeDefinition>,
}

impl ThemeConfig {
    pub fn active(&self) -> Option<&ThemeDefinition> {
        self.themes.get(&self.default_theme)
    }
}

/// Пропсы компонента по умолчанию. Пустые поля не сериализуются.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_details: Option<bool>,
}

/// Полная конфигурация, которую UI передает в фабрику фреймворка.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    /// Ключ: имя компонента (`VBtn`, `VTextField`, ...).
    pub defaults: BTreeMap<String, ComponentDefaults>,
}
