use std::collections::BTreeMap;

use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for every backend interaction. Serde derives let it flow
/// through leptos resources; `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum ApiError {
    /// Non-2xx response, with the backend's error envelope when it parses.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        validation_errors: Option<BTreeMap<String, String>>,
    },
    /// The backend rejected the credential. Views respond by expiring the
    /// session; the HTTP layer itself does not touch session state.
    #[error("session expired")]
    Unauthorized,
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The issuing view unmounted and aborted the request.
    #[error("request cancelled")]
    Cancelled,
}

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
            validation_errors: None,
        }
    }

    /// Maps a non-2xx status plus raw body to the right variant. 401 is
    /// kept distinct so callers can expire the session.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Server {
                status,
                message: envelope
                    .message
                    .unwrap_or_else(|| default_message(status)),
                validation_errors: envelope.validation_errors,
            },
            Err(_) => Self::server(status, default_message(status)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// 404 is a meaningful answer on some endpoints, "no payment yet"
    /// being the main one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }

    /// Field-level validation message, if the backend reported one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            Self::Server {
                validation_errors: Some(errors),
                ..
            } => errors.get(field).map(String::as_str),
            _ => None,
        }
    }
}

fn default_message(status: u16) -> String {
    format!("Request failed with status {}", status)
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
