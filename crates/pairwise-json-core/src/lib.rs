//! Pairwise-covering JSON test-case generation from nested value schemas.
//!
//! A schema maps each field to either a list of literal candidate values or
//! a list of nested sub-schemas (a variable-cardinality object field). The
//! generator walks the schema recursively, pre-computes the full variant set
//! of every object field, encodes variant choice as flat position parameters
//! a pairwise combination engine can reason about, and reconstructs nested
//! result objects from the engine's rows: deduplicated, with every pair of
//! field-value assignments covered by at least one result.
//!
//! ## Example
//!
//! ```
//! use pairwise_json_core::{generate, Properties};
//! use serde_json::json;
//!
//! let schema = json!({ "a": [1, 2], "b": [3, 4] });
//! let results = generate(&schema, &Properties::default()).unwrap();
//! assert!(results.contains(&json!({ "a": 1, "b": 3 })));
//! ```
//!
//! Cardinality restrictions and singular-object flags are supplied through
//! [`Properties`]; a custom covering-array generator can replace the built-in
//! [`IpogEngine`] via [`generate_with_engine`].

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

pub mod engine;
pub mod error;
pub mod path;
pub mod properties;
pub mod space;

mod expand;
mod reconstruct;
mod schema;

pub use engine::{CombinationEngine, IpogEngine};
pub use error::{ErrorCode, GenerateError, RestrictionKind};
pub use properties::{Properties, Restriction};
pub use space::{Param, ParamSpace, ParamValue, Row};

/// Generate the deduplicated pairwise-covering result set for `schema`.
///
/// `schema` must be a JSON object; see the crate docs for its shape.
/// Fails fast on the first configuration, structural, or cardinality error;
/// no partial result list is ever returned.
pub fn generate(schema: &Value, properties: &Properties) -> Result<Vec<Value>, GenerateError> {
    generate_with_engine(schema, properties, &IpogEngine)
}

/// [`generate`] with a caller-supplied combination engine.
pub fn generate_with_engine(
    schema: &Value,
    properties: &Properties,
    engine: &dyn CombinationEngine,
) -> Result<Vec<Value>, GenerateError> {
    properties.validate()?;

    let root = schema
        .as_object()
        .ok_or_else(|| GenerateError::SchemaNotAnObject {
            path: "(top)".to_string(),
        })?;

    let realized = expand::expand_level(root, properties, None, engine)?;
    let total = realized.len();
    let results = distinct(realized);
    debug!(
        generated = total,
        distinct = results.len(),
        "generation finished"
    );
    Ok(results)
}

/// Structural deduplication, first occurrence wins.
///
/// Distinct flat rows can collapse to the same nested object once optional
/// skips and duplicate variant picks are resolved; serialized form is a
/// canonical identity because object keys serialize in sorted order.
fn distinct(results: Vec<Value>) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|value| seen.insert(value.to_string()))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
