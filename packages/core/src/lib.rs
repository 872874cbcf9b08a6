//! Core domain types for the admin dashboard.
//!
//! This crate contains shared types used across all packages:
//! - UserRecord for the user/admin documents served by the backend
//! - MongoDate for the server's extended-JSON timestamp encoding
//! - ProfileBatch for the list endpoint's response envelope

mod batch;
mod user;

pub use batch::ProfileBatch;
pub use user::{MongoDate, MongoDateError, NumberLong, UserRecord};
