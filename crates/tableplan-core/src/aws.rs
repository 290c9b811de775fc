//! DynamoDB-backed implementation of the create-table call.
//!
//! [`DynamoDbApi`] adapts a [`CreateTableRequest`] onto the `aws-sdk-dynamodb`
//! client and mirrors the service's response back into the wire-shape model.
//! Service errors pass through unmodified: the SDK's error code and message
//! become the [`ProvisionError`], with the original error retained as source.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{BuildError, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types as sdk;

use tableplan_model::error::ProvisionError;
use tableplan_model::request::CreateTableRequest;
use tableplan_model::types as wire;

use crate::config::ProvisionerConfig;
use crate::provision::CreateTableApi;

/// A [`CreateTableApi`] backed by the AWS DynamoDB client.
#[derive(Debug, Clone)]
pub struct DynamoDbApi {
    client: Client,
}

impl DynamoDbApi {
    /// Wrap an already-configured client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the provisioner configuration, using the default
    /// credential chain, the configured region, and the endpoint override if
    /// one is set (local development against DynamoDB Local or LocalStack).
    pub async fn from_config(config: &ProvisionerConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;
        Self {
            client: Client::new(&shared),
        }
    }
}

#[async_trait]
impl CreateTableApi for DynamoDbApi {
    async fn create_table(
        &self,
        request: CreateTableRequest,
    ) -> Result<wire::TableDescription, ProvisionError> {
        let output = self
            .client
            .create_table()
            .table_name(request.table_name)
            .set_key_schema(Some(key_schema_to_sdk(&request.key_schema)?))
            .set_attribute_definitions(Some(attribute_definitions_to_sdk(
                &request.attribute_definitions,
            )?))
            .provisioned_throughput(throughput_to_sdk(&request.provisioned_throughput)?)
            .set_global_secondary_indexes(indexes_to_sdk(&request.global_secondary_indexes)?)
            .send()
            .await
            .map_err(service_error)?;

        Ok(output
            .table_description
            .map(description_from_sdk)
            .unwrap_or_default())
    }
}

/// Lift the SDK error's code and message into a [`ProvisionError`], keeping
/// the original error as source. No classification happens here.
fn service_error(err: SdkError<CreateTableError>) -> ProvisionError {
    let code = err.code().map(str::to_owned);
    let message = err.message().map_or_else(|| err.to_string(), str::to_owned);
    match code {
        Some(code) => ProvisionError::service(code, message).with_source(err),
        None => ProvisionError::message(message).with_source(err),
    }
}

fn build_error(err: BuildError) -> ProvisionError {
    ProvisionError::message(format!("failed to construct create-table request: {err}"))
        .with_source(err)
}

// ---------------------------------------------------------------------------
// Request side: wire model -> SDK types
// ---------------------------------------------------------------------------

fn key_schema_to_sdk(
    elements: &[wire::KeySchemaElement],
) -> Result<Vec<sdk::KeySchemaElement>, ProvisionError> {
    elements
        .iter()
        .map(|elem| {
            sdk::KeySchemaElement::builder()
                .attribute_name(elem.attribute_name.as_str())
                .key_type(key_type_to_sdk(elem.key_type))
                .build()
                .map_err(build_error)
        })
        .collect()
}

fn attribute_definitions_to_sdk(
    definitions: &[wire::AttributeDefinition],
) -> Result<Vec<sdk::AttributeDefinition>, ProvisionError> {
    definitions
        .iter()
        .map(|def| {
            sdk::AttributeDefinition::builder()
                .attribute_name(def.attribute_name.as_str())
                .attribute_type(scalar_type_to_sdk(&def.attribute_type))
                .build()
                .map_err(build_error)
        })
        .collect()
}

fn throughput_to_sdk(
    throughput: &wire::ProvisionedThroughput,
) -> Result<sdk::ProvisionedThroughput, ProvisionError> {
    sdk::ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read_capacity_units)
        .write_capacity_units(throughput.write_capacity_units)
        .build()
        .map_err(build_error)
}

fn indexes_to_sdk(
    indexes: &[wire::GlobalSecondaryIndex],
) -> Result<Option<Vec<sdk::GlobalSecondaryIndex>>, ProvisionError> {
    if indexes.is_empty() {
        return Ok(None);
    }
    let converted = indexes
        .iter()
        .map(|index| {
            sdk::GlobalSecondaryIndex::builder()
                .index_name(index.index_name.as_str())
                .set_key_schema(Some(key_schema_to_sdk(&index.key_schema)?))
                .projection(projection_to_sdk(&index.projection))
                .provisioned_throughput(throughput_to_sdk(&index.provisioned_throughput)?)
                .build()
                .map_err(build_error)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(converted))
}

fn projection_to_sdk(projection: &wire::Projection) -> sdk::Projection {
    let mut builder = sdk::Projection::builder();
    if let Some(projection_type) = projection.projection_type {
        builder = builder.projection_type(projection_type_to_sdk(projection_type));
    }
    if !projection.non_key_attributes.is_empty() {
        builder = builder.set_non_key_attributes(Some(projection.non_key_attributes.clone()));
    }
    builder.build()
}

fn key_type_to_sdk(key_type: wire::KeyType) -> sdk::KeyType {
    match key_type {
        wire::KeyType::Hash => sdk::KeyType::Hash,
        wire::KeyType::Range => sdk::KeyType::Range,
    }
}

fn scalar_type_to_sdk(attribute_type: &wire::ScalarAttributeType) -> sdk::ScalarAttributeType {
    match attribute_type {
        wire::ScalarAttributeType::S => sdk::ScalarAttributeType::S,
        wire::ScalarAttributeType::N => sdk::ScalarAttributeType::N,
        wire::ScalarAttributeType::B => sdk::ScalarAttributeType::B,
        // Unreachable for validated requests; the SDK keeps the raw code.
        wire::ScalarAttributeType::Unknown(code) => sdk::ScalarAttributeType::from(code.as_str()),
    }
}

fn projection_type_to_sdk(projection_type: wire::ProjectionType) -> sdk::ProjectionType {
    match projection_type {
        wire::ProjectionType::All => sdk::ProjectionType::All,
        wire::ProjectionType::KeysOnly => sdk::ProjectionType::KeysOnly,
        wire::ProjectionType::Include => sdk::ProjectionType::Include,
    }
}

// ---------------------------------------------------------------------------
// Response side: SDK types -> wire model
// ---------------------------------------------------------------------------

fn description_from_sdk(desc: sdk::TableDescription) -> wire::TableDescription {
    wire::TableDescription {
        table_name: desc.table_name,
        table_status: desc
            .table_status
            .map(|s| wire::TableStatus::from(s.as_str())),
        key_schema: desc
            .key_schema
            .unwrap_or_default()
            .iter()
            .filter_map(key_element_from_sdk)
            .collect(),
        attribute_definitions: desc
            .attribute_definitions
            .unwrap_or_default()
            .into_iter()
            .map(attribute_from_sdk)
            .collect(),
        creation_date_time: desc.creation_date_time.map(|dt| dt.as_secs_f64()),
        table_arn: desc.table_arn,
        table_id: desc.table_id,
        provisioned_throughput: desc.provisioned_throughput.map(throughput_from_sdk),
        global_secondary_indexes: desc
            .global_secondary_indexes
            .unwrap_or_default()
            .into_iter()
            .map(index_from_sdk)
            .collect(),
    }
}

fn key_element_from_sdk(elem: &sdk::KeySchemaElement) -> Option<wire::KeySchemaElement> {
    let key_type = match elem.key_type {
        sdk::KeyType::Hash => wire::KeyType::Hash,
        sdk::KeyType::Range => wire::KeyType::Range,
        // Key types this crate does not model are dropped from the mirror.
        _ => return None,
    };
    Some(wire::KeySchemaElement {
        attribute_name: elem.attribute_name.clone(),
        key_type,
    })
}

fn attribute_from_sdk(def: sdk::AttributeDefinition) -> wire::AttributeDefinition {
    let attribute_type = match def.attribute_type.as_str() {
        "S" => wire::ScalarAttributeType::S,
        "N" => wire::ScalarAttributeType::N,
        "B" => wire::ScalarAttributeType::B,
        other => wire::ScalarAttributeType::Unknown(other.to_owned()),
    };
    wire::AttributeDefinition {
        attribute_name: def.attribute_name,
        attribute_type,
    }
}

fn throughput_from_sdk(
    desc: sdk::ProvisionedThroughputDescription,
) -> wire::ProvisionedThroughputDescription {
    wire::ProvisionedThroughputDescription {
        read_capacity_units: desc.read_capacity_units.unwrap_or_default(),
        write_capacity_units: desc.write_capacity_units.unwrap_or_default(),
        number_of_decreases_today: desc.number_of_decreases_today,
    }
}

fn projection_from_sdk(projection: sdk::Projection) -> wire::Projection {
    let projection_type = projection
        .projection_type
        .and_then(|pt| match pt.as_str() {
            "ALL" => Some(wire::ProjectionType::All),
            "KEYS_ONLY" => Some(wire::ProjectionType::KeysOnly),
            "INCLUDE" => Some(wire::ProjectionType::Include),
            _ => None,
        });
    wire::Projection {
        projection_type,
        non_key_attributes: projection.non_key_attributes.unwrap_or_default(),
    }
}

fn index_from_sdk(desc: sdk::GlobalSecondaryIndexDescription) -> wire::GlobalSecondaryIndexDescription {
    wire::GlobalSecondaryIndexDescription {
        index_name: desc.index_name,
        key_schema: desc
            .key_schema
            .unwrap_or_default()
            .iter()
            .filter_map(key_element_from_sdk)
            .collect(),
        projection: desc.projection.map(projection_from_sdk),
        index_status: desc.index_status.map(|s| s.as_str().to_owned()),
        provisioned_throughput: desc.provisioned_throughput.map(throughput_from_sdk),
        index_arn: desc.index_arn,
    }
}
