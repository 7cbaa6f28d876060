use serde::{Deserialize, Serialize};

use crate::structs::config::completion_config::CompletionConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub completion: CompletionConfig,
}
