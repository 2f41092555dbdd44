use crate::error::{config_err_res, M3uGenError};
use crate::utils::{get_trimmed_string, has_unresolved_env_var, parse_bool_flag, trim_last_slash};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_FILE: &str = "/data/playlist.m3u";
pub const DEFAULT_REFRESH_SECONDS: u64 = 86_400;
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 20;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 Kodi-M3U/1.0";

pub const ENV_URL: &str = "URL";
pub const ENV_USERNAME: &str = "USERNAME";
pub const ENV_PASSWORD: &str = "PASSWORD";
pub const ENV_OUTPUT_FILE: &str = "OUTPUT_FILE";
pub const ENV_REFRESH_SECONDS: &str = "REFRESH_SECONDS";
pub const ENV_REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
pub const ENV_VERIFY_SSL: &str = "VERIFY_SSL";
pub const ENV_USE_CATEGORIES: &str = "USE_CATEGORIES";
pub const ENV_USER_AGENT: &str = "USER_AGENT";

const fn default_as_true() -> bool { true }
fn default_output_file() -> String { DEFAULT_OUTPUT_FILE.to_string() }
const fn default_refresh_seconds() -> u64 { DEFAULT_REFRESH_SECONDS }
const fn default_request_timeout() -> u64 { DEFAULT_REQUEST_TIMEOUT }
fn default_user_agent() -> String { DEFAULT_USER_AGENT.to_string() }

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfigDto {
    #[serde(default = "default_as_true")]
    pub sanitize_sensitive_info: bool,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for LogConfigDto {
    fn default() -> Self {
        LogConfigDto {
            sanitize_sensitive_info: default_as_true(),
            log_level: None,
        }
    }
}

/// Only the `log` section, used to set up logging before the full config is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogLevelConfig {
    #[serde(default)]
    pub log: Option<LogConfigDto>,
}

/// Raw settings as read from the config file and the environment.
///
/// Required values stay optional here, they are checked by [`ConfigDto::prepare`]
/// at the start of every cycle.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_as_true")]
    pub verify_ssl: bool,
    #[serde(default)]
    pub use_categories: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub log: Option<LogConfigDto>,
}

impl Default for ConfigDto {
    fn default() -> Self {
        ConfigDto {
            url: None,
            username: None,
            password: None,
            output_file: default_output_file(),
            refresh_seconds: default_refresh_seconds(),
            request_timeout: default_request_timeout(),
            verify_ssl: default_as_true(),
            use_categories: false,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            log: None,
        }
    }
}

fn env_number<F>(lookup: &F, key: &str, current: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => current,
        Some(value) => match value.trim().parse::<u64>() {
            Ok(number) => number,
            Err(err) => {
                warn!("Invalid value for {key}: '{value}' ({err}), using {current}");
                current
            }
        },
    }
}

impl ConfigDto {
    /// Overrides every setting for which `lookup` returns a value.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.url = Some(url);
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(output_file) = lookup(ENV_OUTPUT_FILE) {
            self.output_file = output_file;
        }
        self.refresh_seconds = env_number(&lookup, ENV_REFRESH_SECONDS, self.refresh_seconds);
        self.request_timeout = env_number(&lookup, ENV_REQUEST_TIMEOUT, self.request_timeout);
        if let Some(verify_ssl) = lookup(ENV_VERIFY_SSL) {
            self.verify_ssl = parse_bool_flag(&verify_ssl);
        }
        if let Some(use_categories) = lookup(ENV_USE_CATEGORIES) {
            self.use_categories = parse_bool_flag(&use_categories);
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = user_agent;
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        if self.refresh_seconds == 0 {
            Duration::from_secs(DEFAULT_REFRESH_SECONDS)
        } else {
            Duration::from_secs(self.refresh_seconds)
        }
    }

    pub fn is_sanitize_sensitive_info(&self) -> bool {
        self.log.as_ref().is_none_or(|l| l.sanitize_sensitive_info)
    }

    /// Validates the raw settings. No request may be sent before this succeeds.
    pub fn prepare(&self) -> Result<Config, M3uGenError> {
        for (key, value) in [(ENV_URL, &self.url), (ENV_USERNAME, &self.username), (ENV_PASSWORD, &self.password)] {
            if value.as_deref().is_some_and(has_unresolved_env_var) {
                return config_err_res!("{key} is missing, its env placeholder could not be resolved");
            }
        }
        let Some(url) = get_trimmed_string(self.url.as_ref()) else {
            return config_err_res!("{ENV_URL} and {ENV_PASSWORD} must be set, {ENV_URL} is missing");
        };
        let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) else {
            return config_err_res!("{ENV_URL} and {ENV_PASSWORD} must be set, {ENV_PASSWORD} is missing");
        };
        if url::Url::parse(&url).is_err() {
            return config_err_res!("Malformed {ENV_URL}: {url}");
        }
        if self.output_file.trim().is_empty() {
            return config_err_res!("{ENV_OUTPUT_FILE} must not be empty");
        }
        let request_timeout = if self.request_timeout == 0 { DEFAULT_REQUEST_TIMEOUT } else { self.request_timeout };

        Ok(Config {
            url: trim_last_slash(&url).to_string(),
            username: self.username.clone().unwrap_or_default(),
            password: password.clone(),
            output_file: PathBuf::from(&self.output_file),
            refresh_interval: self.refresh_interval(),
            request_timeout: Duration::from_secs(request_timeout),
            verify_ssl: self.verify_ssl,
            use_categories: self.use_categories,
            user_agent: self.user_agent.clone(),
            headers: self.headers.clone(),
        })
    }
}

/// Validated settings for one cycle.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub username: String,
    pub password: String,
    pub output_file: PathBuf,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub verify_ssl: bool,
    pub use_categories: bool,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
}
