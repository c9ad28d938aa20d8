//! Configuration module for Vigil DNS
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listen port and bind address
//! - `upstream`: Upstream resolver and forward timeout
//! - `filter`: Filter file path and capacity
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod filter;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use filter::FilterConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
