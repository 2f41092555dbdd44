mod config;
mod playlist;
mod xtream;

pub use self::config::*;
pub use self::playlist::*;
pub use self::xtream::*;
