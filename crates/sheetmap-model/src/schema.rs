//! Schema tree: field definitions and nested sub-schemas.

use serde::{Deserialize, Serialize};

/// One named, labeled value slot in a schema.
///
/// A field is either a leaf (scalar cell value) or, when [`Field::schema`]
/// is set, a composite whose value is itself described by a nested
/// [`Schema`]. Construction is builder-style; the field set is fixed at
/// compile time so no dynamic configuration is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier, used in assignments and validation messages.
    pub name: String,
    /// Canonical human-facing column header.
    pub label: String,
    /// Alternate acceptable headers, tried in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias_labels: Vec<String>,
    /// When false, a missing assignment fails validation.
    #[serde(default)]
    pub optional: bool,
    /// Nested sub-schema for composite fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Field {
    /// Creates a required leaf field with the given name and canonical label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            alias_labels: Vec::new(),
            optional: false,
            schema: None,
        }
    }

    /// Adds an alternate header. Aliases are matched verbatim, never
    /// index-suffixed.
    #[must_use]
    pub fn alias(mut self, label: impl Into<String>) -> Self {
        self.alias_labels.push(label.into());
        self
    }

    /// Marks the field as optional for validation.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches a nested sub-schema, turning the field into a composite.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Returns true if this field carries a nested sub-schema.
    pub fn is_composite(&self) -> bool {
        self.schema.is_some()
    }
}

/// An ordered list of field definitions, possibly nested under a composite
/// field of an enclosing schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
    /// The sub-schema repeats across numbered header variants
    /// ("Label 1", "Label 01", "Label 2", ...).
    #[serde(default)]
    pub sequential_columns: bool,
    /// Multiple instances packed into one cell, separated by this delimiter.
    /// Declared for forward compatibility; resolution does not consume it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_delimiter: Option<String>,
}

impl Schema {
    /// Creates a plain (non-repeating) schema from a field list.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            sequential_columns: false,
            multi_delimiter: None,
        }
    }

    /// Marks the schema as repeating across numbered column variants.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.sequential_columns = true;
        self
    }

    /// Declares a delimiter for the (unimplemented) multiplexed variant.
    #[must_use]
    pub fn with_multi_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.multi_delimiter = Some(delimiter.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_attributes() {
        let field = Field::new("email", "Email")
            .alias("E-mail Address")
            .optional();
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Email");
        assert_eq!(field.alias_labels, vec!["E-mail Address".to_string()]);
        assert!(field.optional);
        assert!(!field.is_composite());
    }

    #[test]
    fn composite_field_carries_schema() {
        let inner = Schema::new(vec![Field::new("street", "Street")]);
        let field = Field::new("address", "Address").with_schema(inner);
        assert!(field.is_composite());
        assert_eq!(field.schema.as_ref().unwrap().fields.len(), 1);
    }

    #[test]
    fn schema_round_trips_through_json() {
        let schema = Schema::new(vec![
            Field::new("name", "Name").alias("Full Name"),
            Field::new("phones", "Phone")
                .optional()
                .with_schema(Schema::new(vec![Field::new("number", "Phone")]).sequential()),
        ]);
        let json = serde_json::to_string(&schema).expect("serialize schema");
        let round: Schema = serde_json::from_str(&json).expect("deserialize schema");
        assert_eq!(round.fields.len(), 2);
        assert_eq!(round.fields[0].alias_labels, vec!["Full Name".to_string()]);
        let sub = round.fields[1].schema.as_ref().expect("nested schema");
        assert!(sub.sequential_columns);
    }

    #[test]
    fn repeat_flags_default_off() {
        let json = r#"{"fields":[{"name":"a","label":"A"}]}"#;
        let schema: Schema = serde_json::from_str(json).expect("deserialize");
        assert!(!schema.sequential_columns);
        assert!(schema.multi_delimiter.is_none());
        assert!(!schema.fields[0].optional);
    }
}
