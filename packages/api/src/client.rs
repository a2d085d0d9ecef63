//! # ApiClient — one method per backend endpoint
//!
//! Thin, typed wrapper over `reqwest`. The backend origin is compiled in
//! ([`DEFAULT_BASE_URL`]); [`ApiClient::with_base`] exists for staging and
//! tests. On wasm32 `reqwest` rides the browser's `fetch`, so the same client
//! code serves the web build and native unit tests.
//!
//! Authenticated endpoints take the bearer token as an explicit argument; the
//! client holds no session state of its own.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    CreditPackage, LoginResponse, PurchaseReceipt, RegisterAck, SearchReport, User,
};

/// Production backend origin.
pub const DEFAULT_BASE_URL: &str = "https://backcheck-api.onrender.com";

/// HTTP client for the backcheck backend.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PurchaseBody<'a> {
    package_type: &'a str,
    amount: f64,
    credits: u32,
}

impl ApiClient {
    /// Client against the production backend.
    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE_URL)
    }

    /// Client against a custom origin, e.g. a staging deployment.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET /api/user/profile`. Any failure means the token is no longer
    /// good for anything and the caller should drop the session.
    pub async fn fetch_profile(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.url("/api/user/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::accept(response).await
    }

    /// `POST /api/auth/login`. The only call that yields a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        Self::accept(response).await
    }

    /// `POST /api/auth/register`. Creates the account but does not sign in.
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterAck, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        Self::accept(response).await
    }

    /// `POST /api/search`. The backend debits one credit before answering.
    pub async fn search(&self, token: &str, name: &str) -> Result<SearchReport, ApiError> {
        let response = self
            .http
            .post(self.url("/api/search"))
            .bearer_auth(token)
            .json(&SearchBody { name })
            .send()
            .await?;
        Self::accept(response).await
    }

    /// `POST /api/purchase`. Creates a pending PIX transaction for `package`.
    pub async fn purchase(
        &self,
        token: &str,
        package: CreditPackage,
    ) -> Result<PurchaseReceipt, ApiError> {
        let response = self
            .http
            .post(self.url("/api/purchase"))
            .bearer_auth(token)
            .json(&PurchaseBody {
                package_type: package.wire_code(),
                amount: package.price_brl(),
                credits: package.credits(),
            })
            .send()
            .await?;
        Self::accept(response).await
    }

    /// Folds a response into `T` or the appropriate [`ApiError`].
    async fn accept<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_production() {
        let client = ApiClient::new();
        assert_eq!(client.base(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_strips_trailing_slash() {
        let client = ApiClient::with_base("http://localhost:8000/");
        assert_eq!(client.base(), "http://localhost:8000");
        assert_eq!(client.url("/api/search"), "http://localhost:8000/api/search");
    }

    #[test]
    fn test_purchase_body_carries_catalog_values() {
        let body = PurchaseBody {
            package_type: CreditPackage::Pack20.wire_code(),
            amount: CreditPackage::Pack20.price_brl(),
            credits: CreditPackage::Pack20.credits(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["package_type"], "pack20");
        assert_eq!(json["credits"], 20);
        assert!((json["amount"].as_f64().unwrap() - 79.9).abs() < 1e-9);
    }
}
