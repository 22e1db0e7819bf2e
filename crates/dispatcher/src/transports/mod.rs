//! Transport implementations
//!
//! Contains HttpTransport and LogTransport.

mod http;
mod log;

pub use self::http::HttpTransport;
pub use self::log::LogTransport;
