//! DynamoDB CreateTable wire-shape types for TablePlan.
//!
//! These types model the subset of the DynamoDB JSON protocol that a
//! table-provisioning call exchanges: the `CreateTable` request, the table
//! description returned on success, and the service error returned on failure.
//! DynamoDB's JSON protocol makes serde derives trivial, so everything here is
//! hand-written with `PascalCase` field renames and `SCREAMING_SNAKE_CASE`
//! enum codes matching the wire format.

pub mod error;
pub mod request;
pub mod types;

pub use error::ProvisionError;
pub use request::{CreateTableRequest, CreateTableResponse};
