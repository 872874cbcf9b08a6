//! HTTP client for the admin dashboard's backend endpoints.
//!
//! The backend exposes three JSON endpoints the dashboard consumes:
//! - `GET /profiles` — the user/admin list
//! - `POST /delete-admin` — delete one record by id
//! - `POST /edit-admin` — rename one record by id
//!
//! A fourth endpoint, `POST /create-admin`, exists on the server but has no
//! agreed request contract yet; the dashboard's add-admin form submit is a
//! stub and this crate deliberately exposes no method for it.
//!
//! # Example
//!
//! ```ignore
//! use api::AdminApi;
//!
//! let api = AdminApi::new("http://localhost:8080")?;
//! let users = api.list_profiles().await?;
//! api.edit_admin(&users[0].id, "New Name").await?;
//! ```

mod client;
mod error;

pub use client::AdminApi;
pub use error::{ApiError, Result};

// Re-export core types for convenience
pub use dashboard_core::{MongoDate, ProfileBatch, UserRecord};
