// Файл: client/http.rs
// HTTP-клиент бэкенда: тонкие обертки над GET/POST/PUT/PATCH/DELETE
// с заголовками по умолчанию, JSON-сериализацией и общим хранилищем cookie.

use super::config::ClientConfig;
use super::cookie::get_cookie;
use super::error::CoreError;
use super::json::{parse_json_from_text, to_json_text};
use crate::utils::error_message::get_error_message_from_text;
use crate::utils::text::value_to_string;
use log::debug;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const JSON_CONTENT_TYPE: &str = "application/json";

// --- Модели запроса/ответа ---

/// Часть multipart-формы.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content: Vec<u8>,
        mime_type: Option<String>,
    },
}

/// Тело POST-запроса.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Form(Vec<FormPart>),
}

/// Сырой ответ: статус и тело. 4xx/5xx здесь не ошибка.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        parse_json_from_text(&self.body, "RawResponse")
    }

    /// Сообщение об ошибке из тела (или "Неизвестная ошибка").
    pub fn error_message(&self) -> String {
        get_error_message_from_text(&self.body)
    }

    /// 2xx -> тело, иначе `CoreError::Status` с извлеченным сообщением.
    pub fn into_result(self) -> Result<String, CoreError> {
        if self.is_success() {
            return Ok(self.body);
        }
        let message = self.error_message();
        Err(CoreError::Status {
            status: self.status_code,
            message,
        })
    }
}

// --- Фабрика reqwest-клиента ---

/// Клиент с User-Agent, сжатием, таймаутами и хранилищем cookie `jar`.
pub fn create_http_client(config: &ClientConfig, jar: Arc<Jar>) -> Result<Client, CoreError> {
    let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
        CoreError::InvalidHeader(format!("Invalid User-Agent ({}): {}", config.user_agent, e))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, user_agent);

    let client = Client::builder()
        .default_headers(headers)
        .cookie_provider(jar)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .build()?;
    Ok(client)
}

// --- ApiClient ---

/// Клиент одного бэкенда. Клонирование дешевое: клиент и cookie общие.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    jar: Arc<Jar>,
    origin: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let origin = config.origin_url()?;
        let jar = Arc::new(Jar::default());
        let client = create_http_client(config, jar.clone())?;
        debug!("ApiClient created for {}", origin);
        Ok(Self { client, jar, origin })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// `origin + path` простой конкатенацией.
    pub fn url_for(&self, path: &str) -> Result<Url, CoreError> {
        let base = self.origin.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// URL для GET: массивы дают по параметру на элемент.
    pub fn build_get_url(
        &self,
        path: &str,
        query: Option<&Map<String, Value>>,
    ) -> Result<Url, CoreError> {
        let mut url = self.url_for(path)?;
        let pairs = query.map(query_pairs).unwrap_or_default();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in &pairs {
                serializer.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub async fn get(
        &self,
        path: &str,
        query: Option<&Map<String, Value>>,
    ) -> Result<RawResponse, CoreError> {
        let url = self.build_get_url(path, query)?;
        debug!("GET {}", url);
        let request = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.send(request).await
    }

    /// POST: JSON с `content_type` (по умолчанию application/json)
    /// или multipart-форма без явного Content-Type.
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        content_type: Option<&str>,
    ) -> Result<RawResponse, CoreError> {
        let url = self.url_for(path)?;
        debug!("POST {}", url);
        let request = self.client.post(url);

        let request = match body {
            Some(RequestBody::Form(parts)) => request.multipart(build_form(parts)?),
            Some(RequestBody::Json(value)) => request
                .header(header::CONTENT_TYPE, content_type_value(content_type)?)
                .body(to_json_text(&value, "POST body")?),
            None => request.header(header::CONTENT_TYPE, content_type_value(content_type)?),
        };
        self.send(request).await
    }

    pub async fn put(&self, path: &str, data: Option<&Value>) -> Result<RawResponse, CoreError> {
        self.send_json(Method::PUT, path, data).await
    }

    pub async fn patch(&self, path: &str, data: Option<&Value>) -> Result<RawResponse, CoreError> {
        self.send_json(Method::PATCH, path, data).await
    }

    pub async fn delete(&self, path: &str) -> Result<RawResponse, CoreError> {
        self.send_json(Method::DELETE, path, None).await
    }

    /// Значение cookie `name`, сохраненной для origin.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let cookies = header.to_str().ok()?;
        get_cookie(cookies, name)
    }

    /// Сохраняет cookie в формате `Set-Cookie` для origin.
    pub fn set_cookie(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.origin);
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
    ) -> Result<RawResponse, CoreError> {
        let url = self.url_for(path)?;
        debug!("{} {}", method, url);
        let mut request = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(value) = data {
            request = request.body(to_json_text(value, "request body")?);
        }
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, CoreError> {
        let response = request.send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status_code) {
            debug!("Request finished with status {}", status_code);
        }
        Ok(RawResponse { status_code, body })
    }
}

// --- Приватные хелперы ---

fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), value_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), value_to_string(other))),
        }
    }
    pairs
}

fn content_type_value(content_type: Option<&str>) -> Result<HeaderValue, CoreError> {
    let raw = content_type.unwrap_or(JSON_CONTENT_TYPE);
    HeaderValue::from_str(raw)
        .map_err(|e| CoreError::InvalidHeader(format!("Invalid Content-Type ({}): {}", raw, e)))
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, CoreError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                content,
                mime_type,
            } => {
                let mut file = Part::bytes(content).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}
