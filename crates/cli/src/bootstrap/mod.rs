mod config;
mod logging;

pub use config::{init_config, load_config};
pub use logging::init_logging;
