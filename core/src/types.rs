//! Type definitions for Table Schemas
//!
//! These mirror the parts of the Frictionless Table Schema that template
//! generation reads. Unknown keys in the input are ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Field types recognised by the Table Schema specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    String,
    /// Any decimal number
    Number,
    /// Whole numbers
    Integer,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time
    Datetime,
    /// Calendar year
    Year,
    /// Year and month
    Yearmonth,
    /// `TRUE` / `FALSE`
    Boolean,
    /// JSON object
    Object,
    /// Geographic point
    Geopoint,
    /// `GeoJSON` geometry
    Geojson,
    /// JSON array
    Array,
    /// ISO 8601 duration
    Duration,
    /// Anything
    Any,
}

impl FieldType {
    /// Every recognised type, in the order the specification lists them
    pub const ALL: [Self; 15] = [
        Self::String,
        Self::Number,
        Self::Integer,
        Self::Date,
        Self::Time,
        Self::Datetime,
        Self::Year,
        Self::Yearmonth,
        Self::Boolean,
        Self::Object,
        Self::Geopoint,
        Self::Geojson,
        Self::Array,
        Self::Duration,
        Self::Any,
    ];

    /// Name as written in a schema
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::Year => "year",
            Self::Yearmonth => "yearmonth",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Geopoint => "geopoint",
            Self::Geojson => "geojson",
            Self::Array => "array",
            Self::Duration => "duration",
            Self::Any => "any",
        }
    }

    /// Look up a type by its schema name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Whether `minimum`/`maximum` are numeric for this type
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar enumeration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// JSON boolean
    Boolean(bool),
    /// JSON number, kept as written
    Number(Number),
    /// JSON string
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Constraints attached to a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Value must be present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Values must be unique within the column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,

    /// Regular expression values must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Closed list of allowed values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<ScalarValue>>,

    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

/// One column of a Table Schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Column name, unique within the schema
    pub name: String,

    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description shown as a note on the header cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared type; absent means untyped
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Type-specific format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Value constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

impl FieldDescriptor {
    /// Create an untyped field with no constraints
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the declared type
    #[must_use]
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the enumeration constraint
    #[must_use]
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScalarValue>,
    {
        self.constraints_mut().enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the inclusive lower bound
    #[must_use]
    pub fn with_minimum(mut self, minimum: impl Into<Number>) -> Self {
        self.constraints_mut().minimum = Some(minimum.into());
        self
    }

    /// Set the inclusive upper bound
    #[must_use]
    pub fn with_maximum(mut self, maximum: impl Into<Number>) -> Self {
        self.constraints_mut().maximum = Some(maximum.into());
        self
    }

    fn constraints_mut(&mut self) -> &mut Constraints {
        self.constraints.get_or_insert_with(Constraints::default)
    }

    /// Enumeration values, if the field has an `enum` constraint
    #[must_use]
    pub fn enum_values(&self) -> Option<&[ScalarValue]> {
        self.constraints.as_ref()?.enum_values.as_deref()
    }

    /// Schema-supplied lower bound
    #[must_use]
    pub fn minimum(&self) -> Option<&Number> {
        self.constraints.as_ref()?.minimum.as_ref()
    }

    /// Schema-supplied upper bound
    #[must_use]
    pub fn maximum(&self) -> Option<&Number> {
        self.constraints.as_ref()?.maximum.as_ref()
    }
}

/// A validated Table Schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Columns in schema order
    pub fields: Vec<FieldDescriptor>,
}

impl TableSchema {
    /// Create a schema from its fields
    #[must_use]
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_field_type_names_round_trip() {
        for field_type in FieldType::ALL {
            assert_eq!(FieldType::from_name(field_type.as_str()), Some(field_type));
        }
        assert_eq!(FieldType::from_name("text"), None);
    }

    #[test]
    fn test_deserialize_field_with_constraints() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "status",
            "type": "string",
            "description": "Current status",
            "constraints": {
                "required": true,
                "enum": ["open", 2, false],
                "minLength": 1
            },
            "rdfType": "ignored"
        }))
        .expect("field should deserialize");

        assert_eq!(field.field_type, Some(FieldType::String));
        assert_eq!(
            field.enum_values(),
            Some(
                &[
                    ScalarValue::from("open"),
                    ScalarValue::from(2_i64),
                    ScalarValue::from(false),
                ][..]
            )
        );
        let constraints = field.constraints.as_ref().expect("constraints present");
        assert_eq!(constraints.min_length, Some(1));
        assert_eq!(constraints.required, Some(true));
    }

    #[test]
    fn test_scalar_display_matches_json() {
        assert_eq!(ScalarValue::from("A").to_string(), "A");
        assert_eq!(ScalarValue::from(10_i64).to_string(), "10");
        assert_eq!(ScalarValue::from(true).to_string(), "true");
        let float: ScalarValue = serde_json::from_value(json!(1.5)).expect("number");
        assert_eq!(float.to_string(), "1.5");
    }

    #[test]
    fn test_builder_accessors() {
        let field = FieldDescriptor::new("age")
            .with_type(FieldType::Integer)
            .with_minimum(0)
            .with_maximum(100);
        assert_eq!(field.minimum().map(ToString::to_string).as_deref(), Some("0"));
        assert_eq!(field.maximum().map(ToString::to_string).as_deref(), Some("100"));
        assert!(field.enum_values().is_none());
        assert!(FieldDescriptor::new("plain").minimum().is_none());
    }
}
