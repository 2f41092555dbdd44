use crate::error::{m3ugen_err, m3ugen_err_res, M3uGenError, M3uGenErrorKind};
use crate::model::{Config, DEFAULT_USER_AGENT};
use crate::utils::{debug_if_enabled, sanitize_sensitive_info};
use log::{log_enabled, trace, warn, Level};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use url::Url;

const UTF8_BOM: char = '\u{feff}';

pub fn format_http_status(status: StatusCode) -> String {
    let code = status.as_u16();
    match status.canonical_reason() {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

pub fn create_client(config: &Config) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(config.request_timeout)
        .danger_accept_invalid_certs(!config.verify_ssl)
}

/// Configured headers first, the user agent is only added when none of them sets one.
pub fn get_request_headers<S: ::std::hash::BuildHasher>(
    request_headers: Option<&HashMap<String, String, S>>,
    default_user_agent: Option<&str>,
) -> HeaderMap {
    let mut headers = HeaderMap::default();

    if let Some(req_headers) = request_headers {
        for (key, value) in req_headers {
            match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!("Ignoring invalid request header {key}"),
            }
        }
    }

    if log_enabled!(Level::Trace) {
        let he: HashMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).to_string()))
            .collect();
        if !he.is_empty() {
            trace!("Request headers {he:?}");
        }
    }

    if !headers.contains_key(USER_AGENT) {
        let config_ua = default_user_agent
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .and_then(|ua| HeaderValue::from_str(ua).ok());

        headers.insert(
            USER_AGENT,
            config_ua.unwrap_or_else(|| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
    }

    headers
}

pub async fn download_text_content(
    client: &reqwest::Client,
    url: &Url,
    headers: &HeaderMap,
) -> Result<String, M3uGenError> {
    let response = client
        .get(url.clone())
        .headers(headers.clone())
        .send()
        .await
        .map_err(|err| m3ugen_err!(M3uGenErrorKind::Network, "Request failed: {} {}",
            sanitize_sensitive_info(url.as_str()), sanitize_sensitive_info(err.to_string().as_str())))?;

    let status = response.status();
    if !status.is_success() {
        return m3ugen_err_res!(M3uGenErrorKind::Network, "Request failed with status {} {}",
            format_http_status(status), sanitize_sensitive_info(url.as_str()));
    }

    response
        .text()
        .await
        .map_err(|err| m3ugen_err!(M3uGenErrorKind::Network, "Failed to read response from {}: {}",
            sanitize_sensitive_info(url.as_str()), sanitize_sensitive_info(err.to_string().as_str())))
}

pub async fn download_json_content<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &Url,
    headers: &HeaderMap,
) -> Result<T, M3uGenError> {
    debug_if_enabled!("Downloading json content from {}", sanitize_sensitive_info(url.as_str()));
    let content = download_text_content(client, url, headers).await?;
    serde_json::from_str::<T>(content.trim_start_matches(UTF8_BOM))
        .map_err(|err| m3ugen_err!(M3uGenErrorKind::Parse, "Failed to parse json from {}: {err}",
            sanitize_sensitive_info(url.as_str())))
}
