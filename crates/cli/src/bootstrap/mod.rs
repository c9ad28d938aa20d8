pub mod config;
pub mod filter;
pub mod logging;

pub use config::load_config;
pub use filter::load_filter;
pub use logging::init_logging;
