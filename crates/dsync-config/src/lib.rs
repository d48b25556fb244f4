pub mod config;
pub mod discovery;
pub mod error;
pub mod template;

pub use config::{Config, Global};
pub use discovery::{config_file_path, config_search_paths, find_config_file};
pub use error::{Error, Result};
pub use template::DEFAULT_CONFIG_TEMPLATE;
