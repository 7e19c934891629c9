//! Single HTTP seam for the console.
//!
//! Every request goes through [`send`], which attaches the bearer token from
//! local storage and the CSRF header from the page's meta tags, maps non-2xx
//! responses to [`ApiError`] and clears the session on 401.

use contracts::shared::api::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::{Callable, Callback};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

const DEFAULT_CSRF_HEADER: &str = "X-CSRF-TOKEN";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
    }

    /// Verbs that change server state and so need the CSRF header
    fn is_mutating(self) -> bool {
        !matches!(self, Verb::Get)
    }
}

/// Credentials attached to outgoing requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestCredentials {
    pub bearer: Option<String>,
    /// (header name, token)
    pub csrf: Option<(String, String)>,
}

impl RequestCredentials {
    /// Read the stored token and the page's CSRF meta tags
    pub fn current() -> Self {
        Self {
            bearer: storage::get_token(),
            csrf: read_csrf_meta(),
        }
    }

    /// Header pairs for a request with the given verb
    pub fn header_pairs(&self, verb: Verb) -> Vec<(String, String)> {
        let mut headers = Vec::new();
        if let Some(token) = self.bearer.as_deref().filter(|t| !t.trim().is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        if verb.is_mutating() {
            if let Some((name, token)) = &self.csrf {
                if !token.is_empty() {
                    let name = if name.trim().is_empty() {
                        DEFAULT_CSRF_HEADER.to_string()
                    } else {
                        name.clone()
                    };
                    headers.push((name, token.clone()));
                }
            }
        }
        headers
    }
}

fn read_csrf_meta() -> Option<(String, String)> {
    let document = web_sys::window()?.document()?;
    let meta_content = |name: &str| -> Option<String> {
        document
            .query_selector(&format!("meta[name='{}']", name))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("content"))
    };
    let token = meta_content("_csrf")?;
    let header = meta_content("_csrf_header").unwrap_or_else(|| DEFAULT_CSRF_HEADER.to_string());
    Some((header, token))
}

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
}

/// Register the handler run after a 401 has cleared the stored session
pub fn set_unauthorized_handler(handler: Callback<()>) {
    ON_UNAUTHORIZED.with(|h| *h.borrow_mut() = Some(handler));
}

fn notify_unauthorized() {
    storage::clear_session();
    let handler = ON_UNAUTHORIZED.with(|h| *h.borrow());
    if let Some(handler) = handler {
        handler.run(());
    }
}

/// Map a failed status and its body to an error
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.best_message().map(str::to_string))
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && text.len() <= 200 && !text.starts_with('<'))
                .then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("Request failed: {}", status));
    ApiError::Http { status, message }
}

async fn send(verb: Verb, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = api_url(path);
    let mut builder = verb.builder(&url);
    for (name, value) in RequestCredentials::current().header_pairs(verb) {
        builder = builder.header(&name, &value);
    }

    let response = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| {
        log::error!("{:?} {} failed: {}", verb, path, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let error = error_from_response(status, &text);
    log::error!("{:?} {} -> {}: {}", verb, path, status, error);
    if matches!(error, ApiError::Unauthorized) {
        notify_unauthorized();
    }
    Err(error)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(Verb::Get, path, None).await?).await
}

/// POST/PUT/PATCH with a JSON body, decoding the JSON reply
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(send(verb, path, Some(encode(body)?)).await?).await
}

/// Request whose reply body is ignored (DELETE, status PATCH, logout)
pub async fn send_no_content<B: Serialize>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let body = body.map(encode).transpose()?;
    send(verb, path, body).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_only_when_token_present() {
        let creds = RequestCredentials::default();
        assert!(creds.header_pairs(Verb::Get).is_empty());

        let creds = RequestCredentials {
            bearer: Some("abc.def".into()),
            csrf: None,
        };
        assert_eq!(
            creds.header_pairs(Verb::Get),
            vec![("Authorization".to_string(), "Bearer abc.def".to_string())]
        );

        let blank = RequestCredentials {
            bearer: Some("  ".into()),
            csrf: None,
        };
        assert!(blank.header_pairs(Verb::Post).is_empty());
    }

    #[test]
    fn csrf_header_only_on_mutations() {
        let creds = RequestCredentials {
            bearer: Some("t".into()),
            csrf: Some(("X-XSRF".into(), "csrf-1".into())),
        };
        assert_eq!(creds.header_pairs(Verb::Get).len(), 1);
        let headers = creds.header_pairs(Verb::Delete);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1], ("X-XSRF".to_string(), "csrf-1".to_string()));
    }

    #[test]
    fn blank_csrf_header_name_uses_default() {
        let creds = RequestCredentials {
            bearer: None,
            csrf: Some((String::new(), "tok".into())),
        };
        assert_eq!(
            creds.header_pairs(Verb::Patch),
            vec![("X-CSRF-TOKEN".to_string(), "tok".to_string())]
        );
    }

    #[test]
    fn error_body_message_is_preferred() {
        let body = r#"{"timestamp":"2024-05-01T10:00:00","status":409,"error":"Conflict","message":"Disease code already exists","path":"/api/configuration/diseases"}"#;
        assert_eq!(
            error_from_response(409, body),
            ApiError::Http {
                status: 409,
                message: "Disease code already exists".into()
            }
        );
    }

    #[test]
    fn plain_and_html_bodies() {
        assert_eq!(
            error_from_response(400, "Invalid severity").to_string(),
            "Invalid severity"
        );
        assert_eq!(
            error_from_response(500, "<html><body>Whitelabel</body></html>").to_string(),
            "Request failed: 500"
        );
        assert_eq!(error_from_response(401, ""), ApiError::Unauthorized);
        assert!(error_from_response(404, "").is_not_found());
    }
}
