//! URL helpers for talking to the REST API

use crate::shared::config::config;

/// Base URL for API requests.
///
/// With a configured port the URL is built from the page's protocol and host
/// (`http://localhost:8080`); with port 0 it is empty and requests go to the
/// page's own origin.
pub fn api_base() -> String {
    let port = config().api.port;
    if port == 0 {
        return String::new();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Full API URL for a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `?a=1&b=x` from key/value pairs, skipping absent values
pub fn query_string(params: &[(&str, Option<String>)]) -> String {
    let parts: Vec<String> = params
        .iter()
        .filter_map(|(k, v)| {
            v.as_ref()
                .map(|v| format!("{}={}", k, urlencoding::encode(v)))
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_skips_missing_values_and_encodes() {
        assert_eq!(query_string(&[("role", None)]), "");
        assert_eq!(
            query_string(&[
                ("district", Some("NUWARA_ELIYA".into())),
                ("role", None),
                ("q", Some("a b&c".into())),
            ]),
            "?district=NUWARA_ELIYA&q=a%20b%26c"
        );
    }
}
