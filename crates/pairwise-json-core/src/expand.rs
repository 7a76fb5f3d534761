//! Recursive schema expansion: the walker / variant-indexer core.
//!
//! One call to [`expand_level`] realizes a single schema level end-to-end:
//! classify each field, recursively pre-compute the variant list of every
//! object field, encode variant choice as flat position parameters, drive
//! the combination engine, and reconstruct nested objects from its rows.
//! The registry and parameter space are call-scoped and threaded explicitly;
//! nothing is shared across levels or calls.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::engine::CombinationEngine;
use crate::error::GenerateError;
use crate::path::{join_path, validate_field_name};
use crate::properties::Properties;
use crate::reconstruct::reconstruct_row;
use crate::schema::{classify_field, FieldKind};
use crate::space::{ParamSpace, ParamValue};

/// Field path → ordered realized variant objects for that path.
///
/// Written exactly once per path, never mutated after insertion.
pub(crate) type VariantRegistry = BTreeMap<String, Vec<Value>>;

/// Expand one schema level into its realized result objects.
///
/// `root_path` is `None` at the top level and the owning field's full path
/// for nested variant schemas. Results are not yet deduplicated; different
/// rows may collapse to the same object once skips and duplicate variant
/// picks are resolved.
pub(crate) fn expand_level(
    schema: &Map<String, Value>,
    properties: &Properties,
    root_path: Option<&str>,
    engine: &dyn CombinationEngine,
) -> Result<Vec<Value>, GenerateError> {
    let mut space = ParamSpace::new();
    let mut registry = VariantRegistry::new();

    for (name, value) in schema {
        validate_field_name(name)?;
        let values = value
            .as_array()
            .ok_or_else(|| GenerateError::NotAListOfValues {
                field: name.clone(),
            })?;
        if values.is_empty() {
            return Err(GenerateError::EmptyDomain {
                field: name.clone(),
            });
        }

        match classify_field(values)? {
            FieldKind::Leaf => {
                trace!(field = %name, candidates = values.len(), "leaf field");
                let domain = values.iter().cloned().map(ParamValue::Literal).collect();
                space.push(name.clone(), domain);
            }
            FieldKind::ObjectField(variants) => {
                index_object_field(
                    name, &variants, properties, root_path, engine, &mut space, &mut registry,
                )?;
            }
        }
    }

    let rows = engine.rows(&space);
    debug!(
        root = root_path.unwrap_or("(top)"),
        params = space.len(),
        rows = rows.len(),
        "level expanded"
    );

    rows.into_iter()
        .map(|row| reconstruct_row(row, &registry, properties))
        .collect()
}

/// Pre-compute an object field's variant list and derive its position
/// parameters.
///
/// All nested variant schemas are expanded first and concatenated in source
/// order into the registry's single write for this path. Slot `i` gets the
/// full variant index range as its domain, led by a skip value once `i`
/// passes the configured minimum; slots past the maximum are never created.
fn index_object_field(
    field: &str,
    variants: &[&Map<String, Value>],
    properties: &Properties,
    root_path: Option<&str>,
    engine: &dyn CombinationEngine,
    space: &mut ParamSpace,
    registry: &mut VariantRegistry,
) -> Result<(), GenerateError> {
    let path = join_path(root_path, field);

    let mut realized = Vec::new();
    for variant in variants {
        realized.extend(expand_level(variant, properties, Some(&path), engine)?);
    }

    if registry.contains_key(&path) {
        return Err(GenerateError::DuplicateVariantRegistration { path });
    }
    let count = realized.len();
    registry.insert(path.clone(), realized);

    let minimum = properties.min_restriction(&path);
    if count < minimum {
        return Err(GenerateError::InsufficientVariants {
            path,
            available: count,
            minimum,
        });
    }

    let slots = count.min(properties.max_restriction(&path));
    trace!(path = %path, variants = count, slots, minimum, "object field indexed");

    for slot in 0..slots {
        let mut domain = Vec::with_capacity(count + 1);
        if slot >= minimum {
            domain.push(ParamValue::Skip);
        }
        domain.extend((0..count).map(ParamValue::Variant));
        space.push(format!("{path}.position.{slot}"), domain);
    }

    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
