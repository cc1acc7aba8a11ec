// Configuration module

mod loader;
mod settings;

pub use loader::load_config;
pub use settings::{Config, DEFAULT_BIND_ADDRESS, DEFAULT_MODEL_PATH};
