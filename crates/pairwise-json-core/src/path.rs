//! Dotted field-path construction and field-name validation.
//!
//! Field paths encode ancestry for registry lookups only; result objects are
//! nested, so final field names are always single path segments.

use crate::error::GenerateError;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Join a child field name onto an optional parent path.
///
/// # Example
/// ```
/// use pairwise_json_core::path::join_path;
/// assert_eq!(join_path(None, "child"), "child");
/// assert_eq!(join_path(Some("parent"), "child"), "parent.child");
/// ```
pub fn join_path(parent: Option<&str>, child: &str) -> String {
    match parent {
        None => child.to_string(),
        Some(p) => format!("{p}{PATH_SEPARATOR}{child}"),
    }
}

/// Validate a raw field name: non-blank, no separator character.
///
/// Names containing the separator would make paths ambiguous, and blank names
/// cannot be addressed at all.
pub fn validate_field_name(name: &str) -> Result<(), GenerateError> {
    if name.trim().is_empty() || name.contains(PATH_SEPARATOR) {
        return Err(GenerateError::InvalidFieldName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Last segment of a field path: the name a field carries in a result object.
pub fn last_segment(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR).next().unwrap_or(path)
}

// ===========================================================================
// Tests
// ===========================================================================
