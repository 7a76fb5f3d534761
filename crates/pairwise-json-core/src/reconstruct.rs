//! Result reconstruction: flat engine rows back into nested objects.
//!
//! Position parameters (`<path>.position.<slot>`) are resolved against the
//! variant registry and re-nested under their field's last path segment;
//! everything else in a row is a leaf copied verbatim. The slot number only
//! disambiguates parameters for the engine; which slot selected a variant
//! is irrelevant once the row is materialized.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::expand::VariantRegistry;
use crate::path::last_segment;
use crate::properties::Properties;
use crate::space::{ParamValue, Row};

fn position_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.*)\.position\.(\d+)$").expect("static pattern"))
}

/// Rebuild one nested result object from a flat engine row.
///
/// Variant selections are deduplicated per `(path, index)` within the row:
/// two slots picking the same variant contribute it once. A `Skip` still
/// records its field as present, so an all-skipped field resolves to an
/// empty list (or `null` for singular object fields) rather than vanishing.
pub(crate) fn reconstruct_row(
    row: Row,
    registry: &VariantRegistry,
    properties: &Properties,
) -> Result<Value, GenerateError> {
    let mut result = Map::new();
    let mut candidates: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    let mut used: BTreeMap<String, HashSet<usize>> = BTreeMap::new();

    for (key, value) in row {
        let Some(caps) = position_pattern().captures(&key) else {
            // Not a position parameter, so a plain leaf assignment.
            match value {
                ParamValue::Literal(v) => {
                    result.insert(key, v);
                }
                ParamValue::Variant(_) | ParamValue::Skip => {
                    return Err(GenerateError::RowValueKindMismatch { key });
                }
            }
            continue;
        };

        let path = caps[1].to_string();
        let slot = candidates.entry(path.clone()).or_default();
        match value {
            ParamValue::Skip => {}
            ParamValue::Variant(index) => {
                if used.entry(path.clone()).or_default().insert(index) {
                    let variant = registry
                        .get(&path)
                        .and_then(|variants| variants.get(index))
                        .ok_or_else(|| GenerateError::UnknownVariantReference {
                            path: path.clone(),
                            index,
                        })?;
                    slot.push(variant.clone());
                }
            }
            ParamValue::Literal(_) => {
                return Err(GenerateError::RowValueKindMismatch { key });
            }
        }
    }

    for (path, list) in candidates {
        let field = last_segment(&path).to_string();
        if properties.is_object(&path) {
            if list.len() > 1 {
                return Err(GenerateError::MultipleVariantsForSingularField {
                    path,
                    count: list.len(),
                });
            }
            result.insert(field, list.into_iter().next().unwrap_or(Value::Null));
        } else {
            result.insert(field, Value::Array(list));
        }
    }

    Ok(Value::Object(result))
}

// ===========================================================================
// Tests
// ===========================================================================
