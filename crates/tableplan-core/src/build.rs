//! Mapping validated definitions into wire-shaped requests.

use tableplan_model::CreateTableRequest;
use tableplan_model::types as wire;

use crate::definition::{
    AttributeType, IndexDefinition, KeyElement, ProjectionSpec, ThroughputSpec,
};
use crate::validate::ValidatedTable;

/// Build the `CreateTable` request for a validated table definition.
///
/// The mapping is deterministic and order-preserving: key schema elements,
/// attribute definitions and secondary indexes appear in the request exactly
/// as declared, so serialized requests diff cleanly against earlier versions
/// of the same definition.
#[must_use]
pub fn build(table: ValidatedTable) -> CreateTableRequest {
    let definition = table.into_definition();

    CreateTableRequest {
        table_name: definition.name,
        key_schema: definition.key_schema.iter().map(key_element).collect(),
        attribute_definitions: definition
            .attribute_definitions
            .iter()
            .map(|def| wire::AttributeDefinition {
                attribute_name: def.name.clone(),
                attribute_type: scalar_type(&def.attribute_type),
            })
            .collect(),
        provisioned_throughput: provisioned_throughput(definition.throughput),
        global_secondary_indexes: definition
            .secondary_indexes
            .iter()
            .map(secondary_index)
            .collect(),
    }
}

fn key_element(elem: &KeyElement) -> wire::KeySchemaElement {
    wire::KeySchemaElement {
        attribute_name: elem.attribute_name.clone(),
        key_type: elem.role,
    }
}

fn scalar_type(attribute_type: &AttributeType) -> wire::ScalarAttributeType {
    match attribute_type {
        AttributeType::String => wire::ScalarAttributeType::S,
        AttributeType::Number => wire::ScalarAttributeType::N,
        AttributeType::Binary => wire::ScalarAttributeType::B,
        // Unreachable for validated input; kept total so the mapping never panics.
        AttributeType::Unknown(code) => wire::ScalarAttributeType::Unknown(code.clone()),
    }
}

fn provisioned_throughput(spec: ThroughputSpec) -> wire::ProvisionedThroughput {
    wire::ProvisionedThroughput {
        read_capacity_units: spec.read_units,
        write_capacity_units: spec.write_units,
    }
}

fn secondary_index(index: &IndexDefinition) -> wire::GlobalSecondaryIndex {
    wire::GlobalSecondaryIndex {
        index_name: index.name.clone(),
        key_schema: index.key_schema.iter().map(key_element).collect(),
        projection: projection(&index.projection),
        provisioned_throughput: provisioned_throughput(index.throughput),
    }
}

fn projection(spec: &ProjectionSpec) -> wire::Projection {
    wire::Projection {
        projection_type: Some(spec.projection_type),
        non_key_attributes: spec.included_attributes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{AttributeDefinition, TableDefinition};
    use crate::validate::validate;
    use tableplan_model::types::{KeyType, ProjectionType};

    fn likes() -> TableDefinition {
        TableDefinition {
            name: "likes".to_owned(),
            key_schema: vec![
                KeyElement {
                    attribute_name: "id".to_owned(),
                    role: KeyType::Hash,
                },
                KeyElement {
                    attribute_name: "username".to_owned(),
                    role: KeyType::Range,
                },
            ],
            attribute_definitions: vec![
                AttributeDefinition {
                    name: "id".to_owned(),
                    attribute_type: AttributeType::String,
                },
                AttributeDefinition {
                    name: "username".to_owned(),
                    attribute_type: AttributeType::String,
                },
            ],
            throughput: ThroughputSpec {
                read_units: 1,
                write_units: 1,
            },
            secondary_indexes: Vec::new(),
        }
    }

    fn posts() -> TableDefinition {
        TableDefinition {
            name: "posts".to_owned(),
            key_schema: vec![
                KeyElement {
                    attribute_name: "id".to_owned(),
                    role: KeyType::Hash,
                },
                KeyElement {
                    attribute_name: "created".to_owned(),
                    role: KeyType::Range,
                },
            ],
            attribute_definitions: vec![
                AttributeDefinition {
                    name: "id".to_owned(),
                    attribute_type: AttributeType::String,
                },
                AttributeDefinition {
                    name: "created".to_owned(),
                    attribute_type: AttributeType::Number,
                },
                AttributeDefinition {
                    name: "publish".to_owned(),
                    attribute_type: AttributeType::Number,
                },
            ],
            throughput: ThroughputSpec {
                read_units: 1,
                write_units: 1,
            },
            secondary_indexes: vec![IndexDefinition {
                name: "publish_index".to_owned(),
                key_schema: vec![
                    KeyElement {
                        attribute_name: "publish".to_owned(),
                        role: KeyType::Hash,
                    },
                    KeyElement {
                        attribute_name: "created".to_owned(),
                        role: KeyType::Range,
                    },
                ],
                projection: ProjectionSpec {
                    projection_type: ProjectionType::All,
                    included_attributes: Vec::new(),
                },
                throughput: ThroughputSpec {
                    read_units: 1,
                    write_units: 1,
                },
            }],
        }
    }

    #[test]
    fn test_should_build_likes_request_with_ordered_keys() {
        // Scenario A: two key elements, declaration order preserved.
        let request = build(validate(likes()).expect("likes validates"));
        assert_eq!(request.table_name, "likes");
        assert_eq!(request.key_schema.len(), 2);
        assert_eq!(request.key_schema[0].attribute_name, "id");
        assert_eq!(request.key_schema[0].key_type, KeyType::Hash);
        assert_eq!(request.key_schema[1].attribute_name, "username");
        assert_eq!(request.key_schema[1].key_type, KeyType::Range);
    }

    #[test]
    fn test_should_preserve_every_field_of_the_definition() {
        let definition = posts();
        let request = build(validate(definition.clone()).expect("posts validates"));

        let request_keys: Vec<(&str, KeyType)> = request
            .key_schema
            .iter()
            .map(|e| (e.attribute_name.as_str(), e.key_type))
            .collect();
        let definition_keys: Vec<(&str, KeyType)> = definition
            .key_schema
            .iter()
            .map(|e| (e.attribute_name.as_str(), e.role))
            .collect();
        assert_eq!(request_keys, definition_keys);

        let request_attrs: Vec<(&str, &str)> = request
            .attribute_definitions
            .iter()
            .map(|d| (d.attribute_name.as_str(), d.attribute_type.as_str()))
            .collect();
        assert_eq!(request_attrs, [("id", "S"), ("created", "N"), ("publish", "N")]);

        assert_eq!(request.provisioned_throughput.read_capacity_units, 1);
        assert_eq!(request.provisioned_throughput.write_capacity_units, 1);
    }

    #[test]
    fn test_should_build_posts_index_with_all_projection() {
        // Scenario C: the ALL projection carries no include list.
        let request = build(validate(posts()).expect("posts validates"));
        assert_eq!(request.global_secondary_indexes.len(), 1);
        let index = &request.global_secondary_indexes[0];
        assert_eq!(index.index_name, "publish_index");
        assert_eq!(index.key_schema[0].attribute_name, "publish");
        assert_eq!(index.key_schema[1].attribute_name, "created");
        assert_eq!(index.projection.projection_type, Some(ProjectionType::All));
        assert!(index.projection.non_key_attributes.is_empty());
        assert_eq!(index.provisioned_throughput.read_capacity_units, 1);
    }

    #[test]
    fn test_should_map_include_projection_attributes() {
        let mut definition = posts();
        definition.secondary_indexes[0].projection = ProjectionSpec {
            projection_type: ProjectionType::Include,
            included_attributes: vec!["title".to_owned(), "body".to_owned()],
        };
        let request = build(validate(definition).expect("INCLUDE validates"));
        let index = &request.global_secondary_indexes[0];
        assert_eq!(index.projection.projection_type, Some(ProjectionType::Include));
        assert_eq!(index.projection.non_key_attributes, ["title", "body"]);
    }
}
