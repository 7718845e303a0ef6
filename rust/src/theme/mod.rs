// Файл: theme/mod.rs
// Светлая тема приложения и настройки компонентов по умолчанию.

pub mod models;

use crate::client::error::{ApiError, CoreError};
use crate::client::json::to_json_text;
pub use models::{ComponentDefaults, ThemeConfig, ThemeDefinition, ThemeVariable, UiConfig};
use std::collections::BTreeMap;

pub const LIGHT_THEME_NAME: &str = "myCustomLightTheme";

const LIGHT_COLORS: &[(&str, &str)] = &[
    ("background", "#ffffff"),
    ("surface", "#f3f3f3"),
    ("surface-bright", "#e4e4e4"),
    ("surface-light", "#ffffff"),
    ("surface-variant", "#bfbfbf"),
    ("on-surface-variant", "#EEE"),
    ("primary", "#000000"),
    ("primary-lighten-1", "#4e4e4e"),
    ("primary-lighten-2", "#0099c2"),
    ("primary-darken-1", "#001f25"),
    ("primary-darken-2", "#00161c"),
    ("secondary", "#f2df73"),
    ("secondary-darken-1", "#bfb05a"),
    ("error", "#B00020"),
    ("info", "#007b9c"),
    ("success", "#4CAF50"),
    ("warning", "#FB8C00"),
];

const LIGHT_TEXT_VARIABLES: &[(&str, &str)] = &[
    ("border-color", "#000000"),
    ("border-radius", "8px"),
    ("border-button-radius", "12px"),
    ("theme-kbd", "#212529"),
    ("theme-on-kbd", "#FFFFFF"),
    ("theme-code", "#F5F5F5"),
    ("theme-on-code", "#000000"),
];

const LIGHT_OPACITY_VARIABLES: &[(&str, f64)] = &[
    ("border-opacity", 0.12),
    ("high-emphasis-opacity", 0.87),
    ("medium-emphasis-opacity", 0.6),
    ("disabled-opacity", 0.38),
    ("idle-opacity", 0.04),
    ("hover-opacity", 0.04),
    ("focus-opacity", 0.12),
    ("selected-opacity", 0.08),
    ("activated-opacity", 0.12),
    ("pressed-opacity", 0.12),
    ("dragged-opacity", 0.08),
];

pub fn light_theme() -> ThemeDefinition {
    let colors = LIGHT_COLORS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let variables = LIGHT_TEXT_VARIABLES
        .iter()
        .map(|(name, value)| (name.to_string(), ThemeVariable::from(*value)))
        .chain(
            LIGHT_OPACITY_VARIABLES
                .iter()
                .map(|(name, value)| (name.to_string(), ThemeVariable::from(*value))),
        )
        .collect();

    ThemeDefinition {
        dark: false,
        colors,
        variables,
    }
}

fn hide_details() -> ComponentDefaults {
    ComponentDefaults {
        hide_details: Some(true),
        ..ComponentDefaults::default()
    }
}

pub fn component_defaults() -> BTreeMap<String, ComponentDefaults> {
    let mut defaults = BTreeMap::new();
    defaults.insert(
        "VBtn".to_string(),
        ComponentDefaults {
            variant: Some("flat".to_string()),
            class: Some("font-weight-bold text-none".to_string()),
            color: Some("primary".to_string()),
            hide_details: None,
        },
    );
    defaults.insert(
        "VTextField".to_string(),
        ComponentDefaults {
            variant: Some("outlined".to_string()),
            ..hide_details()
        },
    );
    defaults.insert("VRadioGroup".to_string(), hide_details());
    defaults.insert("VCheckbox".to_string(), hide_details());
    defaults
}

impl Default for UiConfig {
    fn default() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(LIGHT_THEME_NAME.to_string(), light_theme());

        Self {
            theme: ThemeConfig {
                default_theme: LIGHT_THEME_NAME.to_string(),
                themes,
            },
            defaults: component_defaults(),
        }
    }
}

impl UiConfig {
    pub fn to_json(&self) -> Result<String, CoreError> {
        to_json_text(self, "UiConfig")
    }
}

/// Конфигурация UI в виде JSON для фабрики фреймворка.
#[uniffi::export]
pub fn ui_config_json() -> Result<String, ApiError> {
    Ok(UiConfig::default().to_json()?)
}
