//! The provisioning flow: validate, build, invoke.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use tableplan_model::error::ProvisionError;
use tableplan_model::request::CreateTableRequest;
use tableplan_model::types::TableDescription;

use crate::build::build;
use crate::definition::TableDefinition;
use crate::validate::{ValidationError, validate};

/// The seam to the external table-creation call.
///
/// Implementations issue exactly one create-table call per invocation and
/// deliver exactly one of success or failure; they perform no retries and no
/// error interpretation. See [`crate::aws::DynamoDbApi`] for the shipped
/// implementation.
#[async_trait]
pub trait CreateTableApi: Send + Sync {
    /// Issue the create-table call, returning the service's table description
    /// on success or the raw service error on failure.
    async fn create_table(
        &self,
        request: CreateTableRequest,
    ) -> Result<TableDescription, ProvisionError>;
}

/// Why a provisioning call did not produce a table.
#[derive(Debug, Error)]
pub enum ProvisionFailure {
    /// The definition failed structural validation; no network call was made.
    #[error("invalid table definition: {0}")]
    Validation(#[from] ValidationError),
    /// The service rejected the request; surfaced unmodified.
    #[error(transparent)]
    Service(#[from] ProvisionError),
}

/// Runs the validate → build → invoke flow against a [`CreateTableApi`].
#[derive(Debug)]
pub struct Provisioner<C> {
    client: C,
}

impl<C: CreateTableApi> Provisioner<C> {
    /// Create a provisioner over the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying create-table client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Provision one table from its definition.
    ///
    /// Validation failures short-circuit before the invoker; service errors
    /// are reported as-is. Each call completes with exactly one of success or
    /// failure.
    pub async fn provision(
        &self,
        definition: TableDefinition,
    ) -> Result<TableDescription, ProvisionFailure> {
        let request = build(validate(definition)?);
        let table = request.table_name.clone();

        info!(table = %table, "issuing create-table call");
        match self.client.create_table(request).await {
            Ok(description) => {
                info!(
                    table = %table,
                    status = description.table_status.as_ref().map_or("unknown", |s| s.as_str()),
                    "table created",
                );
                Ok(description)
            }
            Err(e) => {
                warn!(
                    table = %table,
                    code = e.code.as_deref().unwrap_or("unknown"),
                    "create-table call failed",
                );
                Err(e.into())
            }
        }
    }
}
