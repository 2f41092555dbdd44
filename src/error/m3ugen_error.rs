use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use crate::utils::sanitize_sensitive_info;

#[macro_export]
macro_rules! m3ugen_err {
    ($kind:expr, $($arg:tt)*) => {
        $crate::error::M3uGenError::new($kind, format!($($arg)*))
    };
}

pub use m3ugen_err;

#[macro_export]
macro_rules! m3ugen_err_res {
    ($kind:expr, $($arg:tt)*) => {
        Err($crate::error::M3uGenError::new($kind, format!($($arg)*)))
    };
}

pub use m3ugen_err_res;

#[macro_export]
macro_rules! config_err_res {
    // Forwards the format arguments and wraps them as a config error.
    ($($arg:tt)*) => {
        Err($crate::error::M3uGenError::new($crate::error::M3uGenErrorKind::Config, format!($($arg)*)))
    };
}

pub use config_err_res;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum M3uGenErrorKind {
    // missing or invalid settings, checked before any request
    Config,
    Network,
    Parse,
    Io,
}

#[derive(Debug)]
pub struct M3uGenError {
    pub kind: M3uGenErrorKind,
    pub message: String,
}

impl M3uGenError {
    pub const fn new(kind: M3uGenErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for M3uGenError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", sanitize_sensitive_info(&self.message))
    }
}

impl Error for M3uGenError {}

impl From<std::io::Error> for M3uGenError {
    fn from(err: std::io::Error) -> Self {
        Self::new(M3uGenErrorKind::Io, err.to_string())
    }
}
