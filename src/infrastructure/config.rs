//! Runtime settings read from the environment

use crate::core::transcript::DEFAULT_GREETING;
use di::inject;
use di::injectable;
use log::warn;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "WDOC";
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// What to do with the user turn of a call whose backend request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep it; it is sent as context with the next turn.
    #[default]
    Retain,
    /// Remove it so the transcript looks as if the call never happened.
    Rollback,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(FailurePolicy::Retain),
            "rollback" => Ok(FailurePolicy::Rollback),
            other => Err(format!("unknown failure policy `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Which inference profile the backend should use.
    pub model: String,
    pub ollama_host: String,
    pub greeting: String,
    pub failure_policy: FailurePolicy,
    pub bind_address: String,
}

#[injectable]
impl ChatSettings {
    #[inject]
    pub fn create() -> ChatSettings {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl ChatSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChatSettings {
        let failure_policy = match lookup("TRANSCRIPT_ON_FAILURE") {
            None => FailurePolicy::default(),
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!("{e}, using {:?}", FailurePolicy::default());
                FailurePolicy::default()
            }),
        };

        ChatSettings {
            model: lookup("OLLAMA_MODEL").unwrap_or(DEFAULT_MODEL.to_owned()),
            ollama_host: lookup("OLLAMA_HOST").unwrap_or(DEFAULT_OLLAMA_HOST.to_owned()),
            greeting: lookup("CHAT_GREETING").unwrap_or(DEFAULT_GREETING.to_owned()),
            failure_policy,
            bind_address: lookup("BIND_ADDRESS").unwrap_or(DEFAULT_BIND_ADDRESS.to_owned()),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
