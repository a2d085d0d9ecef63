//! # User model and auth payloads
//!
//! [`User`] is the profile record the backend returns from login, register and
//! `GET /api/user/profile`. The interesting field is `credits`: it is the
//! balance *as of the response* and nothing keeps it fresh afterwards. The UI
//! may adjust its copy optimistically (it subtracts one after a successful
//! search) but the server-side ledger is authoritative and the next profile
//! fetch replaces the whole struct.
//!
//! [`LoginResponse`] and [`RegisterAck`] are the envelope shapes of the two
//! auth endpoints. Login is the only call that yields a token; register does
//! not sign the user in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account profile as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether this account can start a search right now.
    pub fn has_credits(&self) -> bool {
        self.credits > 0
    }
}

/// `POST /api/auth/login` response: the bearer token plus the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/auth/register` response. Carries a human-readable confirmation
/// and the created profile, but no token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterAck {
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_decodes_from_backend_shape() {
        let json = r#"{
            "id": "b0c1d2e3",
            "email": "ana@example.com",
            "credits": 3,
            "created_at": "2025-05-01T12:30:00+00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.credits, 3);
        assert!(user.has_credits());
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_missing_credits_default_to_zero() {
        let json = r#"{"id": "x", "email": "x@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.credits, 0);
        assert!(!user.has_credits());
    }

    #[test]
    fn test_login_response_envelope() {
        let json = r#"{
            "token": "jwt-here",
            "user": {"id": "u1", "email": "a@b.c", "credits": 1}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "jwt-here");
        assert_eq!(resp.user.credits, 1);
    }
}
