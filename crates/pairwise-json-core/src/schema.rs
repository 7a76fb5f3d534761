//! Structural classification of schema entries.
//!
//! A schema maps field names to arrays. An entry is an **object field** when
//! every array element is itself a schema object (the field holds a variable
//! number of child objects); otherwise it is a **leaf** and the array is the
//! field's literal domain. Classification is a pure structural predicate:
//! no semantic typing beyond "list of values" vs "nested object".

use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::path::validate_field_name;

/// How one schema entry participates in expansion.
#[derive(Debug)]
pub(crate) enum FieldKind<'a> {
    /// The value array is the literal candidate domain.
    Leaf,
    /// Every element is a nested schema variant, expanded recursively.
    ObjectField(Vec<&'a Map<String, Value>>),
}

/// Classify a field's candidate array.
///
/// Object elements are shallowly checked as schema objects even when a
/// non-object sibling later makes the field a leaf: a malformed nested
/// schema is a structural error, not a literal value.
pub(crate) fn classify_field<'a>(values: &'a [Value]) -> Result<FieldKind<'a>, GenerateError> {
    let mut nested = Vec::with_capacity(values.len());
    let mut all_objects = true;

    for value in values {
        match value {
            Value::Object(map) => {
                check_schema_object(map)?;
                nested.push(map);
            }
            _ => all_objects = false,
        }
    }

    if all_objects {
        Ok(FieldKind::ObjectField(nested))
    } else {
        Ok(FieldKind::Leaf)
    }
}

/// Shallow well-formedness check for one nested schema object: valid field
/// names, array values. Deeper levels are checked when the recursion reaches
/// them.
fn check_schema_object(map: &Map<String, Value>) -> Result<(), GenerateError> {
    for (name, value) in map {
        validate_field_name(name)?;
        if !value.is_array() {
            return Err(GenerateError::NotAListOfValues {
                field: name.clone(),
            });
        }
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
