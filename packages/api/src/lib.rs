//! # API crate — typed client for the backcheck backend
//!
//! The backcheck backend is a hosted HTTPS service; this crate is the only
//! place the frontends talk to it. Every endpoint the product uses has a typed
//! method on [`ApiClient`], and every payload that crosses the wire has a serde
//! model under [`models`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer auth where required |
//! | [`error`] | [`ApiError`]: backend rejections vs. transport failures, plus display text |
//! | [`models`] | `User`, `SearchReport` (and its section view-models), credit packages, PIX payment types |
//!
//! ## Endpoints covered
//!
//! - **Auth**: `POST /api/auth/register`, `POST /api/auth/login`, `GET /api/user/profile`
//! - **Search**: `POST /api/search` (consumes one credit server-side)
//! - **Billing**: `POST /api/purchase` (creates a pending PIX transaction)
//!
//! The client never retries, times out, or cancels; each call maps to exactly
//! one request and resolves to `Result<T, ApiError>`.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    CreditPackage, LoginResponse, PixInfo, PurchaseOrder, PurchaseReceipt, RegisterAck,
    ReportCategory, ReportItem, ReportSection, SearchReport, User,
};
