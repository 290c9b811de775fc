//! Request and response shapes for the `CreateTable` call.
//!
//! `PascalCase` JSON field naming matches the DynamoDB wire protocol
//! (`awsJson1_0`). Optional and empty fields are omitted so the serialized
//! request diffs cleanly against prior definitions.

use serde::{Deserialize, Serialize};

use crate::types::{
    AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, ProvisionedThroughput,
    TableDescription,
};

/// A fully-formed `CreateTable` request.
///
/// Produced by the request builder from a validated table definition; key
/// schema, attribute definitions and index lists keep their declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableRequest {
    /// The name of the table to create.
    pub table_name: String,

    /// The key schema for the table (partition key and optional sort key).
    pub key_schema: Vec<KeySchemaElement>,

    /// The attribute definitions for the key schema and index key attributes.
    pub attribute_definitions: Vec<AttributeDefinition>,

    /// The provisioned throughput settings for the table.
    pub provisioned_throughput: ProvisionedThroughput,

    /// Global secondary indexes to create on the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,
}

/// Response for the `CreateTable` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableResponse {
    /// The properties of the newly created table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}
