// Файл: lib.rs
// Ядро веб-клиента инспекции дефектов: HTTP-обертки, cookie, переводы меток,
// конфигурация темы и извлечение сообщений об ошибках.

pub mod client;
pub mod theme;
pub mod translations;
pub mod utils;

uniffi::setup_scaffolding!();

pub use client::{ApiClient, ApiError, ClientConfig, CoreError, RawResponse, RequestBody};
pub use translations::translate_damage_label;
pub use utils::{flatten_object, get_error_message, UNKNOWN_ERROR};

/// Включает env_logger (уровень из RUST_LOG). Повторный вызов ничего не делает.
#[uniffi::export]
pub fn init_logger() {
    if env_logger::try_init().is_ok() {
        log::debug!("Logger initialized");
    }
}
