//! Generation restrictions: cardinality bounds and singular-object flags.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, RestrictionKind};

/// A cardinality bound for one object-field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    /// Dotted path of the object field the bound applies to.
    pub field_path: String,
    /// The bound itself; must be positive.
    pub value: i64,
}

impl Restriction {
    pub fn new(field_path: impl Into<String>, value: i64) -> Self {
        Self {
            field_path: field_path.into(),
            value,
        }
    }
}

/// Read-only configuration for one generation call.
///
/// All sections default to empty, which places no bounds on any field and
/// marks no field as a singular object.
///
/// ## Serialization Format
///
/// Fields are serialized in `camelCase` (`minRestrictions`, `maxRestrictions`,
/// `objects`), the wire format consumed from properties JSON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Properties {
    /// Lower bounds: minimum number of variants that must appear per path.
    pub min_restrictions: Vec<Restriction>,
    /// Upper bounds: maximum number of variant slots generated per path.
    pub max_restrictions: Vec<Restriction>,
    /// Paths holding at most one variant per generated case.
    pub objects: BTreeSet<String>,
}

impl Properties {
    /// Minimum variant count required for `path`. Defaults to 0 (no minimum).
    pub fn min_restriction(&self, path: &str) -> usize {
        find_restriction(&self.min_restrictions, path).unwrap_or(0)
    }

    /// Maximum variant slots generated for `path`. Defaults to unbounded.
    pub fn max_restriction(&self, path: &str) -> usize {
        find_restriction(&self.max_restrictions, path).unwrap_or(usize::MAX)
    }

    /// Whether `path` is a singular object field rather than a list field.
    pub fn is_object(&self, path: &str) -> bool {
        self.objects.contains(path)
    }

    /// Check configuration invariants: unique paths per set, positive values.
    ///
    /// Runs once before generation starts; restriction errors never surface
    /// mid-expansion.
    pub fn validate(&self) -> Result<(), GenerateError> {
        validate_restrictions(&self.max_restrictions, RestrictionKind::Max)?;
        validate_restrictions(&self.min_restrictions, RestrictionKind::Min)
    }
}

fn find_restriction(restrictions: &[Restriction], path: &str) -> Option<usize> {
    restrictions
        .iter()
        .find(|r| r.field_path == path)
        .map(|r| r.value as usize)
}

fn validate_restrictions(
    restrictions: &[Restriction],
    kind: RestrictionKind,
) -> Result<(), GenerateError> {
    let mut seen = HashSet::new();
    for r in restrictions {
        if !seen.insert(r.field_path.as_str()) {
            return Err(GenerateError::DuplicateRestriction {
                kind,
                field_path: r.field_path.clone(),
            });
        }
        if r.value <= 0 {
            return Err(GenerateError::NonPositiveRestriction {
                kind,
                field_path: r.field_path.clone(),
                value: r.value,
            });
        }
    }
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
