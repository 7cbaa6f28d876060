pub mod commands;
pub mod completion_error;
pub mod difficulty;
