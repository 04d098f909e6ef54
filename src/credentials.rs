use crate::types::{DigestError, Result};

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GMAIL_ADDRESS: &str = "GMAIL_ADDRESS";
pub const GMAIL_APP_PASSWORD: &str = "GMAIL_APP_PASSWORD";

/// Resolves secrets by name. The binary uses [`EnvCredentials`]; tests swap
/// in an in-memory map so they never touch the real process environment.
pub trait CredentialStore {
    fn get(&self, name: &str) -> Option<String>;
}

/// Credential store backed by process environment variables. Empty values
/// count as absent.
pub struct EnvCredentials;

impl CredentialStore for EnvCredentials {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

/// Resolve a required credential, failing with a configuration error naming
/// the missing variable.
pub fn require(store: &dyn CredentialStore, name: &'static str) -> Result<String> {
    store
        .get(name)
        .ok_or(DigestError::MissingCredential { name })
}
