// Файл: utils/mod.rs
// Чистые хелперы без I/O: разворачивание JSON и сообщения об ошибках.

pub mod error_message;
pub mod flatten;
pub mod text;

pub use error_message::{get_error_message, get_error_message_from_text, UNKNOWN_ERROR};
pub use flatten::{flatten_object, flatten_with_parent, FlatMap};
