pub mod chat_backend;
