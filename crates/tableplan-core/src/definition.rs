//! Caller-facing table-definition documents.
//!
//! A [`TableDefinition`] is the declarative input to the provisioning flow:
//! a snake_case JSON document naming the table, its key schema, the attribute
//! definitions backing the keys, the provisioned throughput, and any global
//! secondary indexes. Documents are plain value objects; they carry no
//! validation state of their own (see [`crate::validate`]).

use serde::{Deserialize, Serialize};

use tableplan_model::types::{KeyType, ProjectionType};

/// A declarative definition of a single table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// The table name.
    pub name: String,

    /// The primary key schema: one HASH element, optionally one RANGE element.
    pub key_schema: Vec<KeyElement>,

    /// The attribute definitions for every key attribute of the table and its
    /// indexes.
    pub attribute_definitions: Vec<AttributeDefinition>,

    /// Provisioned throughput for the table.
    pub throughput: ThroughputSpec,

    /// Global secondary indexes, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_indexes: Vec<IndexDefinition>,
}

/// One element of a key schema: an attribute name and its key role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyElement {
    /// The name of the key attribute.
    pub attribute_name: String,
    /// Whether the attribute is the partition (`HASH`) or sort (`RANGE`) key.
    pub role: KeyType,
}

/// Declares a key attribute's name and scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// The attribute name, unique within the table.
    pub name: String,
    /// The attribute's scalar type.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
}

/// Scalar type of a key attribute.
///
/// Documents may spell types either as the long form (`STRING`) or the wire
/// code (`S`). Unrecognized codes are preserved and rejected by the validator
/// rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// A UTF-8 string.
    String,
    /// A number.
    Number,
    /// Opaque binary data.
    Binary,
    /// An unrecognized type code.
    Unknown(String),
}

impl AttributeType {
    /// Returns the canonical long-form name (`STRING`, `NUMBER`, `BINARY`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Binary => "BINARY",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for AttributeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttributeType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "STRING" | "S" => Ok(Self::String),
            "NUMBER" | "N" => Ok(Self::Number),
            "BINARY" | "B" => Ok(Self::Binary),
            _ => Ok(Self::Unknown(s)),
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provisioned read/write capacity for a table or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSpec {
    /// Read capacity units; must be a positive integer.
    pub read_units: i64,
    /// Write capacity units; must be a positive integer.
    pub write_units: i64,
}

/// A global secondary index over the table data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// The index name, unique among the table's indexes.
    pub name: String,
    /// The index key schema, under the same HASH/RANGE rule as the table.
    pub key_schema: Vec<KeyElement>,
    /// Which attributes are projected into the index.
    pub projection: ProjectionSpec,
    /// Provisioned throughput for the index.
    pub throughput: ThroughputSpec,
}

/// Which attributes a secondary index projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSpec {
    /// `ALL`, `KEYS_ONLY`, or `INCLUDE`.
    #[serde(rename = "type")]
    pub projection_type: ProjectionType,
    /// The attributes to include; required and non-empty iff the type is
    /// `INCLUDE`, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_attributes: Vec<String>,
}
