pub mod config_helper;
pub mod link_builder;
pub mod prompt_builder;
