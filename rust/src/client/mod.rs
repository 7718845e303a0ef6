// Файл: client/mod.rs
// Работа с бэкендом: ошибки, настройки, HTTP, cookie, JSON и FFI-обертки.

pub mod config;
pub mod cookie;
pub mod error;
pub mod http;
pub mod json;
pub mod request_impl;

pub use config::ClientConfig;
pub use error::{ApiError, CoreError};
pub use http::{ApiClient, FormPart, RawResponse, RequestBody};
pub use request_impl::{NetworkRequest, WebClient};
