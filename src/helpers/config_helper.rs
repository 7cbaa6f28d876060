use crate::config::constants::{DEFAULT_ENDPOINT, PLACEHOLDER_API_KEY};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_endpoint() -> String {
        DEFAULT_ENDPOINT.to_string()
    }

    pub fn default_api_key() -> String {
        PLACEHOLDER_API_KEY.to_string()
    }

    pub fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }
}
