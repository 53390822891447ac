//! Server API
//!
//! fetch() wrappers for the account server's JSON endpoints, organized by domain.

mod precreation;
mod people;
mod account;
mod payment;

use leptos::prelude::document;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, HtmlInputElement, Request, RequestCredentials, RequestInit, Response};

use crate::config::AppConfig;
use crate::error::ApiError;

// Re-export all public items
pub use precreation::*;
pub use people::*;
pub use account::*;
pub use payment::*;

// ========================
// Reply Envelope
// ========================

/// `{status, message, ...payload}` reply shared by every POST endpoint
#[derive(Debug, Deserialize)]
pub struct ServerReply<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific fields; absent on failure replies
    #[serde(flatten)]
    pub body: Option<T>,
}

/// Successful reply: the server's message plus its payload
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<T> {
    pub message: String,
    pub body: T,
}

impl<T> ServerReply<T> {
    pub fn into_result(self) -> Result<Accepted<T>, ApiError> {
        let message = self.message.unwrap_or_default();
        if self.status != "success" {
            return Err(ApiError::Server(message));
        }
        let body = self
            .body
            .ok_or_else(|| ApiError::Decode("success reply without payload".to_string()))?;
        Ok(Accepted { message, body })
    }
}

/// Payload of replies that carry nothing but status and message
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoBody {}

// ========================
// Transport
// ========================

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// CSRF token from the page's hidden form input
pub fn csrf_token(config: &AppConfig) -> Result<String, ApiError> {
    let selector = format!("[name={}]", config.csrf_field);
    document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingCsrfToken)
}

async fn send(request: Request) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let text = send(request).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a JSON body with the CSRF header.
///
/// Fails with `MissingCsrfToken` before touching the network when the page
/// carries no token.
pub async fn post_json<B, T>(config: &AppConfig, url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let token = csrf_token(config)?;
    let payload = serde_json::to_string(body)?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Content-Type", "application/json").map_err(js_error)?;
    headers.set(&config.csrf_header, &token).map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&payload));
    init.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let text = send(request).await?;
    Ok(serde_json::from_str(&text)?)
}
