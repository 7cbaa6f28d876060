pub mod completion_client;
pub mod fallback;
pub mod http_backend;
pub mod normalizer;
pub mod orchestrator;
