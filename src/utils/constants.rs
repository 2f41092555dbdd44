use regex::Regex;
use std::sync::atomic::AtomicBool;
use std::sync::LazyLock;

pub const ENV_LOG_LEVEL: &str = "M3UGEN_LOG";

pub struct Constants {
    pub re_credentials: Regex,
    pub re_ipv4: Regex,
    pub re_ipv6: Regex,
    pub re_stream_url: Regex,
    pub re_url: Regex,
    pub re_password: Regex,
    pub re_env_var: Regex,
    pub sanitize: AtomicBool,
}

#[allow(clippy::unwrap_used)]
pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_credentials: Regex::new(r"((username|password|token)=)[^&\s)]*").unwrap(),
        re_ipv4: Regex::new(r"\b((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\b").unwrap(),
        re_ipv6: Regex::new(r"\b([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b|\b([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}\b").unwrap(),
        re_stream_url: Regex::new(r"(?i)(?P<scheme>https?://)[^/\s]+/(?P<ctx>live|movie|series)/[^/\s]+/[^/\s]+/").unwrap(),
        re_url: Regex::new(r"(https?://)[^/\s]*?/(\S*)").unwrap(),
        re_password: Regex::new(r"(password:\s*)\w+").unwrap(),
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        sanitize: AtomicBool::new(true),
    });
