pub mod completion_config;
pub mod config;
