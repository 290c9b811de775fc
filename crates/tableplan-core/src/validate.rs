//! Structural validation of table definitions.
//!
//! [`validate`] checks a [`TableDefinition`] against the service's structural
//! constraints before any network call is attempted, failing fast on the first
//! violation. The checks are pure; a definition that passes is wrapped in a
//! [`ValidatedTable`], the only input the request builder accepts.

use std::collections::HashSet;

use thiserror::Error;

use tableplan_model::types::{KeyType, ProjectionType};

use crate::definition::{
    AttributeDefinition, AttributeType, IndexDefinition, KeyElement, ProjectionSpec,
    TableDefinition, ThroughputSpec,
};

/// Bounds on table and index names, matching the service's constraint
/// (3-255 characters of `[a-zA-Z0-9_.-]`).
const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 255;

/// A structural violation in a table definition.
///
/// Every variant names the offending field path and the rule it violates;
/// validation stops at the first violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field}: required field is missing or empty")]
    MissingField {
        /// Path of the missing field.
        field: String,
    },

    /// A table or index name violates the service's naming rule.
    #[error("{field}: name {name:?} must be 3-255 characters of [a-zA-Z0-9_.-]")]
    InvalidTableName {
        /// Path of the offending name field.
        field: String,
        /// The rejected name.
        name: String,
    },

    /// A key schema has the wrong HASH/RANGE cardinality.
    #[error("{field}: {reason}")]
    InvalidKeySchema {
        /// Path of the offending key schema.
        field: String,
        /// The violated cardinality rule.
        reason: &'static str,
    },

    /// A key schema element references an attribute with no definition.
    #[error("{field}: key attribute {name:?} has no matching attribute definition")]
    UnknownAttributeReference {
        /// Path of the offending key schema element.
        field: String,
        /// The unresolved attribute name.
        name: String,
    },

    /// An attribute definition or index name appears more than once.
    #[error("{field}: duplicate name {name:?}")]
    DuplicateName {
        /// Path of the offending entry.
        field: String,
        /// The duplicated name.
        name: String,
    },

    /// An attribute definition uses a type outside `S`, `N`, `B`.
    #[error("{field}: attribute type must be STRING, NUMBER or BINARY, got {code:?}")]
    InvalidAttributeType {
        /// Path of the offending attribute definition.
        field: String,
        /// The rejected type code.
        code: String,
    },

    /// An index projection violates the INCLUDE rule.
    #[error("{field}: {reason}")]
    InvalidProjection {
        /// Path of the offending projection.
        field: String,
        /// The violated projection rule.
        reason: &'static str,
    },

    /// A throughput value is not a positive integer.
    #[error("{field}: throughput units must be positive, got {value}")]
    InvalidThroughput {
        /// Path of the offending throughput field.
        field: String,
        /// The rejected value.
        value: i64,
    },
}

impl ValidationError {
    /// Path of the field this error is anchored to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::InvalidTableName { field, .. }
            | Self::InvalidKeySchema { field, .. }
            | Self::UnknownAttributeReference { field, .. }
            | Self::DuplicateName { field, .. }
            | Self::InvalidAttributeType { field, .. }
            | Self::InvalidProjection { field, .. }
            | Self::InvalidThroughput { field, .. } => field,
        }
    }
}

/// A table definition that passed structural validation.
///
/// Proof token for the request builder: the only way to obtain one is
/// through [`validate`].
#[derive(Debug, Clone)]
pub struct ValidatedTable(TableDefinition);

impl ValidatedTable {
    /// The validated definition.
    #[must_use]
    pub fn definition(&self) -> &TableDefinition {
        &self.0
    }

    /// Consume the token, returning the definition.
    #[must_use]
    pub fn into_definition(self) -> TableDefinition {
        self.0
    }
}

/// Validate a table definition against the service's structural constraints.
///
/// Checks run in a fixed order and stop at the first violation: table name,
/// key schema cardinality, key attribute resolution, attribute definitions,
/// table throughput, then each secondary index in declaration order.
pub fn validate(definition: TableDefinition) -> Result<ValidatedTable, ValidationError> {
    validate_name("name", &definition.name)?;
    validate_key_schema_structure("key_schema", &definition.key_schema)?;
    validate_key_references(
        "key_schema",
        &definition.key_schema,
        &definition.attribute_definitions,
    )?;
    validate_attribute_definitions(&definition.attribute_definitions)?;
    validate_throughput("throughput", definition.throughput)?;

    let mut index_names = HashSet::new();
    for (i, index) in definition.secondary_indexes.iter().enumerate() {
        validate_index(i, index, &definition.attribute_definitions, &mut index_names)?;
    }

    Ok(ValidatedTable(definition))
}

/// Table and index names: non-empty, then the service's charset/length rule.
fn validate_name(field: &str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_owned(),
        });
    }
    let well_formed = (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name.len())
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'-');
    if !well_formed {
        return Err(ValidationError::InvalidTableName {
            field: field.to_owned(),
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Exactly one HASH element, at most one RANGE element, nothing else.
fn validate_key_schema_structure(
    field: &str,
    elements: &[KeyElement],
) -> Result<(), ValidationError> {
    let hash_count = elements.iter().filter(|e| e.role == KeyType::Hash).count();
    let range_count = elements.iter().filter(|e| e.role == KeyType::Range).count();

    if hash_count != 1 {
        return Err(ValidationError::InvalidKeySchema {
            field: field.to_owned(),
            reason: "exactly one HASH key element is required",
        });
    }
    if range_count > 1 {
        return Err(ValidationError::InvalidKeySchema {
            field: field.to_owned(),
            reason: "at most one RANGE key element is allowed",
        });
    }
    if elements.len() > 2 {
        return Err(ValidationError::InvalidKeySchema {
            field: field.to_owned(),
            reason: "a key schema holds at most two elements",
        });
    }
    Ok(())
}

/// Every key schema element must resolve to an attribute definition.
fn validate_key_references(
    field: &str,
    elements: &[KeyElement],
    definitions: &[AttributeDefinition],
) -> Result<(), ValidationError> {
    for (i, elem) in elements.iter().enumerate() {
        if !definitions.iter().any(|d| d.name == elem.attribute_name) {
            return Err(ValidationError::UnknownAttributeReference {
                field: format!("{field}[{i}]"),
                name: elem.attribute_name.clone(),
            });
        }
    }
    Ok(())
}

/// Attribute definitions: unique by name, types within the allowed codes.
fn validate_attribute_definitions(
    definitions: &[AttributeDefinition],
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (i, def) in definitions.iter().enumerate() {
        if !seen.insert(def.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                field: format!("attribute_definitions[{i}]"),
                name: def.name.clone(),
            });
        }
        if let AttributeType::Unknown(code) = &def.attribute_type {
            return Err(ValidationError::InvalidAttributeType {
                field: format!("attribute_definitions[{i}].type"),
                code: code.clone(),
            });
        }
    }
    Ok(())
}

/// Read and write units must both be strictly positive.
fn validate_throughput(field: &str, throughput: ThroughputSpec) -> Result<(), ValidationError> {
    if throughput.read_units <= 0 {
        return Err(ValidationError::InvalidThroughput {
            field: format!("{field}.read_units"),
            value: throughput.read_units,
        });
    }
    if throughput.write_units <= 0 {
        return Err(ValidationError::InvalidThroughput {
            field: format!("{field}.write_units"),
            value: throughput.write_units,
        });
    }
    Ok(())
}

/// One secondary index: key schema, name, projection, throughput.
fn validate_index<'a>(
    position: usize,
    index: &'a IndexDefinition,
    definitions: &[AttributeDefinition],
    index_names: &mut HashSet<&'a str>,
) -> Result<(), ValidationError> {
    let prefix = format!("secondary_indexes[{position}]");

    validate_key_schema_structure(&format!("{prefix}.key_schema"), &index.key_schema)?;
    validate_key_references(
        &format!("{prefix}.key_schema"),
        &index.key_schema,
        definitions,
    )?;
    validate_name(&format!("{prefix}.name"), &index.name)?;
    if !index_names.insert(index.name.as_str()) {
        return Err(ValidationError::DuplicateName {
            field: format!("{prefix}.name"),
            name: index.name.clone(),
        });
    }
    validate_projection(&format!("{prefix}.projection"), &index.projection)?;
    validate_throughput(&format!("{prefix}.throughput"), index.throughput)?;
    Ok(())
}

/// The INCLUDE rule: included attributes non-empty iff the type is INCLUDE.
fn validate_projection(field: &str, projection: &ProjectionSpec) -> Result<(), ValidationError> {
    match projection.projection_type {
        ProjectionType::Include => {
            if projection.included_attributes.is_empty() {
                return Err(ValidationError::InvalidProjection {
                    field: field.to_owned(),
                    reason: "INCLUDE projections require a non-empty attribute list",
                });
            }
        }
        ProjectionType::All | ProjectionType::KeysOnly => {
            if !projection.included_attributes.is_empty() {
                return Err(ValidationError::InvalidProjection {
                    field: field.to_owned(),
                    reason: "included attributes are only allowed for INCLUDE projections",
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, role: KeyType) -> KeyElement {
        KeyElement {
            attribute_name: name.to_owned(),
            role,
        }
    }

    fn attr(name: &str, attribute_type: AttributeType) -> AttributeDefinition {
        AttributeDefinition {
            name: name.to_owned(),
            attribute_type,
        }
    }

    fn throughput(read: i64, write: i64) -> ThroughputSpec {
        ThroughputSpec {
            read_units: read,
            write_units: write,
        }
    }

    /// Scenario A: the `likes` table from the production definitions.
    fn likes() -> TableDefinition {
        TableDefinition {
            name: "likes".to_owned(),
            key_schema: vec![key("id", KeyType::Hash), key("username", KeyType::Range)],
            attribute_definitions: vec![
                attr("id", AttributeType::String),
                attr("username", AttributeType::String),
            ],
            throughput: throughput(1, 1),
            secondary_indexes: Vec::new(),
        }
    }

    /// Scenario C: the `posts` table with its `publish_index` GSI.
    fn posts() -> TableDefinition {
        TableDefinition {
            name: "posts".to_owned(),
            key_schema: vec![key("id", KeyType::Hash), key("created", KeyType::Range)],
            attribute_definitions: vec![
                attr("id", AttributeType::String),
                attr("created", AttributeType::Number),
                attr("publish", AttributeType::Number),
            ],
            throughput: throughput(1, 1),
            secondary_indexes: vec![IndexDefinition {
                name: "publish_index".to_owned(),
                key_schema: vec![key("publish", KeyType::Hash), key("created", KeyType::Range)],
                projection: ProjectionSpec {
                    projection_type: ProjectionType::All,
                    included_attributes: Vec::new(),
                },
                throughput: throughput(1, 1),
            }],
        }
    }

    #[test]
    fn test_should_validate_likes_definition() {
        let validated = validate(likes()).expect("likes validates");
        let ks = &validated.definition().key_schema;
        assert_eq!(ks.len(), 2);
        assert_eq!(ks[0].attribute_name, "id");
        assert_eq!(ks[1].attribute_name, "username");
    }

    #[test]
    fn test_should_validate_posts_definition_with_index() {
        let validated = validate(posts()).expect("posts validates");
        assert_eq!(validated.definition().secondary_indexes.len(), 1);
    }

    #[test]
    fn test_should_reject_empty_table_name() {
        let mut def = likes();
        def.name = String::new();
        let err = validate(def).expect_err("empty name rejected");
        assert_eq!(err, ValidationError::MissingField {
            field: "name".to_owned()
        });
    }

    #[test]
    fn test_should_reject_malformed_table_name() {
        let mut def = likes();
        def.name = "li kes!".to_owned();
        let err = validate(def).expect_err("malformed name rejected");
        assert!(matches!(err, ValidationError::InvalidTableName { .. }));
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_should_reject_two_hash_elements() {
        let mut def = likes();
        def.key_schema = vec![key("id", KeyType::Hash), key("username", KeyType::Hash)];
        let err = validate(def).expect_err("double HASH rejected");
        assert!(matches!(err, ValidationError::InvalidKeySchema { .. }));
    }

    #[test]
    fn test_should_reject_missing_hash_element() {
        let mut def = likes();
        def.key_schema = vec![key("username", KeyType::Range)];
        let err = validate(def).expect_err("missing HASH rejected");
        assert!(matches!(err, ValidationError::InvalidKeySchema { .. }));
    }

    #[test]
    fn test_should_reject_unresolved_key_attribute() {
        // Scenario B: RANGE key `created` has no attribute definition.
        let mut def = likes();
        def.key_schema = vec![key("id", KeyType::Hash), key("created", KeyType::Range)];
        let err = validate(def).expect_err("unresolved reference rejected");
        match err {
            ValidationError::UnknownAttributeReference { field, name } => {
                assert_eq!(name, "created");
                assert_eq!(field, "key_schema[1]");
            }
            other => panic!("expected UnknownAttributeReference, got {other:?}"),
        }
    }

    #[test]
    fn test_should_reject_duplicate_attribute_definitions() {
        let mut def = likes();
        def.attribute_definitions.push(attr("id", AttributeType::String));
        let err = validate(def).expect_err("duplicate attribute rejected");
        assert!(matches!(err, ValidationError::DuplicateName { .. }));
    }

    #[test]
    fn test_should_reject_unknown_attribute_type() {
        let mut def = likes();
        def.attribute_definitions[1] = attr("username", AttributeType::Unknown("BOOL".to_owned()));
        let err = validate(def).expect_err("unknown type rejected");
        match err {
            ValidationError::InvalidAttributeType { field, code } => {
                assert_eq!(field, "attribute_definitions[1].type");
                assert_eq!(code, "BOOL");
            }
            other => panic!("expected InvalidAttributeType, got {other:?}"),
        }
    }

    #[test]
    fn test_should_reject_non_positive_throughput() {
        let mut def = likes();
        def.throughput = throughput(0, 1);
        let err = validate(def).expect_err("zero reads rejected");
        assert_eq!(err, ValidationError::InvalidThroughput {
            field: "throughput.read_units".to_owned(),
            value: 0,
        });

        let mut def = likes();
        def.throughput = throughput(1, -5);
        let err = validate(def).expect_err("negative writes rejected");
        assert!(matches!(err, ValidationError::InvalidThroughput { .. }));
    }

    #[test]
    fn test_should_reject_index_key_without_definition() {
        let mut def = posts();
        def.secondary_indexes[0].key_schema = vec![key("author", KeyType::Hash)];
        let err = validate(def).expect_err("unresolved index key rejected");
        match err {
            ValidationError::UnknownAttributeReference { field, name } => {
                assert_eq!(name, "author");
                assert_eq!(field, "secondary_indexes[0].key_schema[0]");
            }
            other => panic!("expected UnknownAttributeReference, got {other:?}"),
        }
    }

    #[test]
    fn test_should_reject_duplicate_index_names() {
        let mut def = posts();
        let duplicate = def.secondary_indexes[0].clone();
        def.secondary_indexes.push(duplicate);
        let err = validate(def).expect_err("duplicate index name rejected");
        assert_eq!(err, ValidationError::DuplicateName {
            field: "secondary_indexes[1].name".to_owned(),
            name: "publish_index".to_owned(),
        });
    }

    #[test]
    fn test_should_reject_include_projection_without_attributes() {
        let mut def = posts();
        def.secondary_indexes[0].projection = ProjectionSpec {
            projection_type: ProjectionType::Include,
            included_attributes: Vec::new(),
        };
        let err = validate(def).expect_err("empty INCLUDE rejected");
        assert!(matches!(err, ValidationError::InvalidProjection { .. }));
        assert_eq!(err.field(), "secondary_indexes[0].projection");
    }

    #[test]
    fn test_should_reject_included_attributes_outside_include() {
        let mut def = posts();
        def.secondary_indexes[0].projection = ProjectionSpec {
            projection_type: ProjectionType::KeysOnly,
            included_attributes: vec!["title".to_owned()],
        };
        let err = validate(def).expect_err("stray include list rejected");
        assert!(matches!(err, ValidationError::InvalidProjection { .. }));
    }

    #[test]
    fn test_should_reject_index_with_double_hash() {
        let mut def = posts();
        def.secondary_indexes[0].key_schema =
            vec![key("publish", KeyType::Hash), key("created", KeyType::Hash)];
        let err = validate(def).expect_err("index double HASH rejected");
        assert!(matches!(err, ValidationError::InvalidKeySchema { .. }));
        assert_eq!(err.field(), "secondary_indexes[0].key_schema");
    }

    #[test]
    fn test_should_reject_non_positive_index_throughput() {
        let mut def = posts();
        def.secondary_indexes[0].throughput = throughput(1, 0);
        let err = validate(def).expect_err("index zero writes rejected");
        assert_eq!(err.field(), "secondary_indexes[0].throughput.write_units");
    }

    #[test]
    fn test_should_accept_include_projection_with_attributes() {
        let mut def = posts();
        def.secondary_indexes[0].projection = ProjectionSpec {
            projection_type: ProjectionType::Include,
            included_attributes: vec!["title".to_owned()],
        };
        validate(def).expect("INCLUDE with attributes validates");
    }

    #[test]
    fn test_should_stop_at_first_violation() {
        // Both the key schema and the throughput are invalid; the key schema
        // check runs first.
        let mut def = likes();
        def.key_schema = vec![key("id", KeyType::Hash), key("username", KeyType::Hash)];
        def.throughput = throughput(0, 0);
        let err = validate(def).expect_err("invalid definition rejected");
        assert!(matches!(err, ValidationError::InvalidKeySchema { .. }));
    }
}
