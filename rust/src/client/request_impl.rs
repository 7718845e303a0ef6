// Файл: client/request_impl.rs
// FFI-граница: объект WebClient и свободные функции для UI-хоста.
// JSON передается строками, все ошибки сводятся к ApiError.

use super::config::ClientConfig;
use super::cookie;
use super::error::{ApiError, CoreError};
use super::http::{ApiClient, FormPart, RawResponse, RequestBody};
use super::json::{parse_json_from_text, to_json_text};
use crate::translations::translate_damage_label;
use crate::utils::{flatten_object, get_error_message_from_text};
use log::debug;
use reqwest::Method;
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::Arc;

// --- FFI-структуры ---

/// Универсальный запрос для `WebClient::fetch_raw`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct NetworkRequest {
    pub path: String,
    pub method: String,
    /// Для GET: объект query-параметров; для остальных: тело.
    pub body_json: Option<String>,
    pub content_type: Option<String>,
}

// --- Приватные хелперы ---

// `null` равносилен отсутствию тела
fn parse_optional_json(json: Option<String>, context: &str) -> Result<Option<Value>, CoreError> {
    let value = json
        .map(|text| parse_json_from_text::<Value>(&text, context))
        .transpose()?;
    Ok(value.filter(|v| !v.is_null()))
}

fn parse_query(json: Option<String>) -> Result<Option<Map<String, Value>>, CoreError> {
    match parse_optional_json(json, "query")? {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(CoreError::InvalidQuery(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

// --- WebClient ---

#[derive(Debug, uniffi::Object)]
pub struct WebClient {
    inner: ApiClient,
}

impl WebClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self {
            inner: ApiClient::new(config)?,
        })
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl WebClient {
    #[uniffi::constructor]
    pub fn new(origin: String) -> Result<Arc<Self>, ApiError> {
        Ok(Arc::new(Self::from_config(&ClientConfig::with_origin(origin))?))
    }

    /// Origin и таймаут из переменных окружения.
    #[uniffi::constructor]
    pub fn from_env() -> Result<Arc<Self>, ApiError> {
        Ok(Arc::new(Self::from_config(&ClientConfig::from_env())?))
    }

    pub async fn get(
        &self,
        path: String,
        query_json: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let query = parse_query(query_json)?;
        Ok(self.inner.get(&path, query.as_ref()).await?)
    }

    pub async fn post(
        &self,
        path: String,
        body_json: Option<String>,
        content_type: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let body = parse_optional_json(body_json, "POST body")?.map(RequestBody::Json);
        Ok(self
            .inner
            .post(&path, body, content_type.as_deref())
            .await?)
    }

    pub async fn post_form(
        &self,
        path: String,
        parts: Vec<FormPart>,
    ) -> Result<RawResponse, ApiError> {
        Ok(self
            .inner
            .post(&path, Some(RequestBody::Form(parts)), None)
            .await?)
    }

    pub async fn put(
        &self,
        path: String,
        body_json: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let body = parse_optional_json(body_json, "PUT body")?;
        Ok(self.inner.put(&path, body.as_ref()).await?)
    }

    pub async fn patch(
        &self,
        path: String,
        body_json: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let body = parse_optional_json(body_json, "PATCH body")?;
        Ok(self.inner.patch(&path, body.as_ref()).await?)
    }

    pub async fn delete(&self, path: String) -> Result<RawResponse, ApiError> {
        Ok(self.inner.delete(&path).await?)
    }

    /// Запрос с методом из строки. 4xx/5xx возвращаются как RawResponse.
    pub async fn fetch_raw(&self, request: NetworkRequest) -> Result<RawResponse, ApiError> {
        debug!("fetch_raw [{}] {}", request.method, request.path);

        let method = Method::from_str(&request.method.to_ascii_uppercase())
            .map_err(|_| CoreError::InvalidMethod(request.method.clone()))?;

        match method {
            Method::GET => self.get(request.path, request.body_json).await,
            Method::POST => {
                self.post(request.path, request.body_json, request.content_type)
                    .await
            }
            Method::PUT => self.put(request.path, request.body_json).await,
            Method::PATCH => self.patch(request.path, request.body_json).await,
            Method::DELETE => self.delete(request.path).await,
            _ => Err(CoreError::InvalidMethod(request.method).into()),
        }
    }

    pub fn cookie(&self, name: String) -> Option<String> {
        self.inner.cookie(&name)
    }

    pub fn set_cookie(&self, cookie: String) {
        self.inner.set_cookie(&cookie);
    }
}

// --- Свободные функции ---

/// Сообщение для пользователя из тела ответа с ошибкой. Не падает.
#[uniffi::export]
pub fn error_message_from_json(body: String) -> String {
    get_error_message_from_text(&body)
}

/// Плоская карта из JSON-документа, снова в виде JSON-объекта.
#[uniffi::export]
pub fn flatten_json(json: String) -> Result<String, ApiError> {
    let value: Value = parse_json_from_text(&json, "flatten_json")?;
    Ok(to_json_text(&flatten_object(&value), "flatten_json")?)
}

/// Значение cookie из строки `Cookie`-заголовка.
#[uniffi::export]
pub fn get_cookie(cookies: String, name: String) -> Option<String> {
    cookie::get_cookie(&cookies, &name)
}

/// Русское название метки детекции.
#[uniffi::export]
pub fn translate_label(label: String) -> String {
    translate_damage_label(&label)
}
