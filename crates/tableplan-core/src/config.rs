//! Provisioner configuration.

use std::env;

/// Configuration for the DynamoDB-backed provisioning client.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// AWS region the client targets.
    pub region: String,
    /// Endpoint override for local development (e.g. a DynamoDB Local or
    /// LocalStack endpoint). `None` targets the real service.
    pub endpoint_url: Option<String>,
}

impl ProvisionerConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `AWS_REGION` (falling back to `DEFAULT_REGION`, then
    /// `us-east-1`) and `DYNAMODB_ENDPOINT_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION")
                .or_else(|_| env::var("DEFAULT_REGION"))
                .unwrap_or_else(|_| "us-east-1".to_owned()),
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL").ok(),
        }
    }
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_owned(),
            endpoint_url: None,
        }
    }
}
