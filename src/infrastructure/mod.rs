pub mod config;
pub mod ollama;
pub mod traits;
