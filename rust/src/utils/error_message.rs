// Файл: utils/error_message.rs
// Извлечение читаемого сообщения из тела ответа с ошибкой.

use super::flatten::flatten_object;
use super::text::value_to_string;
use serde_json::Value;

/// Сообщение, если ни одно известное поле не найдено.
pub const UNKNOWN_ERROR: &str = "Неизвестная ошибка";

/// Поля конверта ошибки, которые понимает бэкенд.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeField {
    Details,
    Errors,
    Error,
    NewPassword,
}

impl EnvelopeField {
    /// Порядок проверки: берется первое найденное поле.
    pub const PRIORITY: [EnvelopeField; 4] = [
        EnvelopeField::Details,
        EnvelopeField::Errors,
        EnvelopeField::Error,
        EnvelopeField::NewPassword,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EnvelopeField::Details => "details",
            EnvelopeField::Errors => "errors",
            EnvelopeField::Error => "error",
            EnvelopeField::NewPassword => "new_password",
        }
    }
}

/// Найденное поле конверта и его содержимое.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorEnvelope<'a> {
    field: EnvelopeField,
    payload: &'a Value,
}

impl<'a> ErrorEnvelope<'a> {
    /// Ищет первое известное поле. Не-объекты конвертом не считаются.
    /// Поле со значением `null` считается присутствующим.
    pub fn detect(error: &'a Value) -> Option<Self> {
        let map = error.as_object()?;
        EnvelopeField::PRIORITY.iter().find_map(|&field| {
            map.get(field.key())
                .map(|payload| ErrorEnvelope { field, payload })
        })
    }

    pub fn field(&self) -> EnvelopeField {
        self.field
    }

    pub fn payload(&self) -> &'a Value {
        self.payload
    }

    /// Листья содержимого через пробел, в порядке обхода.
    /// `null`-листья пропускаются, чтобы не было лишних пробелов.
    pub fn message(&self) -> String {
        flatten_object(self.payload)
            .values()
            .filter(|leaf| !leaf.is_null())
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Возвращает строку для показа пользователю. Никогда не падает.
pub fn get_error_message(error: &Value) -> String {
    match ErrorEnvelope::detect(error) {
        Some(envelope) => envelope.message(),
        None => {
            log::debug!("Error body has no known envelope field, using fallback");
            UNKNOWN_ERROR.to_string()
        }
    }
}

/// Вариант для сырого тела ответа: невалидный JSON дает `UNKNOWN_ERROR`.
pub fn get_error_message_from_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => get_error_message(&value),
        Err(e) => {
            log::debug!("Error body is not JSON ({}), using fallback", e);
            UNKNOWN_ERROR.to_string()
        }
    }
}
