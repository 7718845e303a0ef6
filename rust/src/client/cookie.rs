// Файл: client/cookie.rs
// Поиск значения cookie в строке вида "a=1; b=2".

use log::warn;
use percent_encoding::percent_decode_str;

/// Возвращает декодированное значение cookie `name` или `None`.
/// Куски без `=` пропускаются; `+` не трактуется как пробел.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|cookie| cookie.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| decode_value(value.trim()))
}

fn decode_value(value: &str) -> String {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            warn!("Cookie value is not valid UTF-8 after decoding: {}", e);
            value.to_string()
        }
    }
}
