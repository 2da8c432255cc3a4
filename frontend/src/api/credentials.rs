//! Durable storage for the authentication credential: one JSON record
//! under a fixed key, hydrated at startup, re-read before every request,
//! written on login and removed on logout. Missing or malformed data
//! degrades to `None`; nothing here can fail outward.

use serde::{Deserialize, Serialize};

use crate::utils::storage;

pub const CREDENTIAL_KEY: &str = "auth_credential";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub prefix: String,
    pub token: String,
}

impl Credential {
    pub fn new(prefix: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            token: token.into(),
        }
    }

    /// `Authorization` header value, `"<prefix> <token>"`.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.prefix, self.token)
    }
}

pub fn load() -> Option<Credential> {
    let raw = storage::get_item(CREDENTIAL_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn save(credential: &Credential) {
    if let Ok(raw) = serde_json::to_string(credential) {
        storage::set_item(CREDENTIAL_KEY, &raw);
    }
}

pub fn clear() {
    storage::remove_item(CREDENTIAL_KEY);
}
