mod config;

pub use config::{ConfigError, DemoConfig, Network};
