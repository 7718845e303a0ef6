// Файл: client/error.rs
// Типы ошибок: внутренняя CoreError и FFI-ошибка ApiError.

use thiserror::Error;

// --- 1. Внутренняя ошибка (CoreError) ---

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to parse JSON response or payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // Не-2xx ответ; message уже извлечен из тела
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

impl CoreError {
    /// Текст для пользователя: для ответов сервера это извлеченное сообщение.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// --- 2. FFI-ошибка (ApiError) ---

#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum ApiError {
    #[error("Network or request error: {0}")]
    RequestError(String),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("{0}")]
    ResponseError(String),
}

// --- 3. Мост CoreError -> ApiError ---

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Network(e) => ApiError::RequestError(e.to_string()),
            CoreError::UrlParse(e) => ApiError::RequestError(e.to_string()),
            CoreError::InvalidMethod(m) => ApiError::RequestError(format!("Invalid Method: {}", m)),
            CoreError::InvalidHeader(h) => ApiError::RequestError(format!("Header error: {}", h)),
            CoreError::InvalidOrigin(o) => ApiError::RequestError(format!("Origin error: {}", o)),
            CoreError::InvalidQuery(q) => ApiError::RequestError(format!("Query error: {}", q)),
            CoreError::Parse(e) => ApiError::ParseError(e.to_string()),
            CoreError::Status { message, .. } => ApiError::ResponseError(message),
        }
    }
}
