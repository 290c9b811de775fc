//! Core provisioning logic for TablePlan.
//!
//! The flow is a single pass: a declarative [`TableDefinition`] is checked by
//! [`validate`], mapped into a wire-shaped request by [`build`], and handed to
//! a [`CreateTableApi`] implementation by the [`Provisioner`]. Validation
//! failures never reach the network; service errors are surfaced unmodified.

pub mod aws;
pub mod build;
pub mod config;
pub mod definition;
pub mod provision;
pub mod validate;

pub use aws::DynamoDbApi;
pub use build::build;
pub use config::ProvisionerConfig;
pub use definition::TableDefinition;
pub use provision::{CreateTableApi, ProvisionFailure, Provisioner};
pub use validate::{ValidatedTable, ValidationError, validate};
