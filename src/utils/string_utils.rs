use std::borrow::Cow;
use std::sync::atomic::Ordering;
use crate::utils::CONSTANTS;

pub fn set_sanitize_sensitive_info(value: bool) {
    CONSTANTS.sanitize.store(value, Ordering::Relaxed);
}

/// Masks credentials, hosts and ip addresses so urls can be logged.
pub fn sanitize_sensitive_info(query: &str) -> Cow<'_, str> {
    if !CONSTANTS.sanitize.load(Ordering::Relaxed) {
        return Cow::Borrowed(query);
    }

    let mut result = query.to_owned();

    for (re, replacement) in &[
        (&CONSTANTS.re_credentials, "$1***"),
        (&CONSTANTS.re_stream_url, "$1***/$2/***/***/"),
        (&CONSTANTS.re_url, "$1***/$2"),
        (&CONSTANTS.re_ipv4, "***"),
        (&CONSTANTS.re_ipv6, "***"),
        (&CONSTANTS.re_password, "$1***"),
    ] {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    Cow::Owned(result)
}

pub fn trim_last_slash(s: &str) -> Cow<'_, str> {
    match s.strip_suffix('/') {
        Some(stripped) => Cow::Owned(stripped.to_string()),
        None => Cow::Borrowed(s),
    }
}

pub fn get_trimmed_string(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Environment flags follow the usual shell conventions.
pub fn parse_bool_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::{parse_bool_flag, sanitize_sensitive_info, trim_last_slash};

    #[test]
    fn test_sanitize_api_url() {
        let url = "http://provider.tv:8080/player_api.php?username=john&password=secret&action=get_live_streams";
        let masked = sanitize_sensitive_info(url);
        assert!(!masked.contains("john"));
        assert!(!masked.contains("secret"));
        assert!(!masked.contains("provider.tv"));
        assert!(masked.contains("action=get_live_streams"));
    }

    #[test]
    fn test_sanitize_stream_url() {
        let url = "http://provider.tv/live/john/secret/1234.ts";
        let masked = sanitize_sensitive_info(url);
        assert!(!masked.contains("john"));
        assert!(!masked.contains("secret"));
        assert!(masked.ends_with("1234.ts"));
    }

    #[test]
    fn test_trim_last_slash() {
        assert_eq!(trim_last_slash("http://provider.tv/"), "http://provider.tv");
        assert_eq!(trim_last_slash("http://provider.tv"), "http://provider.tv");
    }

    #[test]
    fn test_parse_bool_flag() {
        for value in ["1", "true", "TRUE", "Yes", " yes "] {
            assert!(parse_bool_flag(value), "{value}");
        }
        for value in ["0", "false", "no", "", "on"] {
            assert!(!parse_bool_flag(value), "{value}");
        }
    }
}
