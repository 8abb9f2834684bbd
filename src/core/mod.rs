pub mod errors;
pub mod messages;
pub mod services;
pub mod traits;
pub mod transcript;
