mod m3ugen_error;

pub use self::m3ugen_error::*;
