//! # ApiError — what a backend call can fail with
//!
//! Two failure families matter to the UI and they are surfaced differently:
//!
//! - [`ApiError::Rejected`] — the backend answered with a non-success status.
//!   The body is FastAPI-style `{"detail": "..."}`; the detail string is shown
//!   to the user verbatim (it is already user-facing copy, e.g. a 401 login
//!   comes back as "invalid credentials").
//! - [`ApiError::Transport`] / [`ApiError::Decode`] — the request never
//!   completed or the body was not what we expect. The raw error is logged but
//!   users only ever see a fixed generic connection message.
//!
//! [`ApiError::user_message`] implements that split in one place so every view
//! renders failures the same way.

use serde::Deserialize;
use thiserror::Error;

/// Shown for any failure that is not a meaningful backend rejection.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend processed the request and said no.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The request never got a response (DNS, TLS, offline, CORS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Got a success status but the body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// FastAPI error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a non-success response body.
    ///
    /// Falls back to a status-derived message when the body is not the
    /// expected `{"detail": ...}` shape (proxies and gateways answer with
    /// HTML error pages).
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail,
            Err(_) => format!("request failed ({status})"),
        };
        ApiError::Rejected { status, detail }
    }

    /// The HTTP status for rejections, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { detail, .. } => detail.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}
