//! Error types for test-case generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Variant names and their serialized `snake_case` strings are part of the
/// public contract: tests and downstream tooling assert on failure kind
/// rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// A restriction set names the same field path twice.
    DuplicateRestriction,
    /// A restriction value is zero or negative.
    NonPositiveRestriction,
    /// The schema (or a nested variant) is not a JSON object.
    SchemaNotAnObject,
    /// A field name is blank or contains the path separator.
    InvalidFieldName,
    /// A field's candidate values are not a JSON array.
    NotAListOfValues,
    /// A field's candidate value list is empty.
    EmptyDomain,
    /// Realized variant count fell below the configured minimum.
    InsufficientVariants,
    /// Internal: the same variant path was registered twice.
    DuplicateVariantRegistration,
    /// Internal: a singular object field resolved to more than one variant.
    MultipleVariantsForSingularField,
    /// Internal: a generated row referenced an unregistered variant.
    UnknownVariantReference,
    /// Internal: a row value's kind does not match its parameter kind.
    RowValueKindMismatch,
}

/// Which restriction set a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    Min,
    Max,
}

impl std::fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestrictionKind::Min => write!(f, "min"),
            RestrictionKind::Max => write!(f, "max"),
        }
    }
}

/// Failure raised by [`crate::generate`].
///
/// All failures are synchronous and fail-fast: no partial result list is ever
/// returned. The `Internal` group indicates an encoding bug in this crate and
/// should never surface in correct operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("Duplicate field path [{field_path}] in {kind} restrictions")]
    DuplicateRestriction {
        kind: RestrictionKind,
        field_path: String,
    },

    #[error("{kind} restriction for [{field_path}] must be positive, got {value}")]
    NonPositiveRestriction {
        kind: RestrictionKind,
        field_path: String,
        value: i64,
    },

    #[error("Schema at [{path}] is not a JSON object")]
    SchemaNotAnObject { path: String },

    #[error("Illegal field [{name}]: need a non-blank name without dots")]
    InvalidFieldName { name: String },

    #[error("For field [{field}] need a list of possible values")]
    NotAListOfValues { field: String },

    #[error("Field [{field}] has no candidate values")]
    EmptyDomain { field: String },

    #[error("Generated variants number less than allowed for [{path}]: {available} < {minimum}")]
    InsufficientVariants {
        path: String,
        available: usize,
        minimum: usize,
    },

    #[error("Already generated variants for [{path}]")]
    DuplicateVariantRegistration { path: String },

    #[error("More than one variant ({count}) for object field [{path}]")]
    MultipleVariantsForSingularField { path: String, count: usize },

    #[error("Row references unknown variant {index} for [{path}]")]
    UnknownVariantReference { path: String, index: usize },

    #[error("Row value for [{key}] does not match its parameter kind")]
    RowValueKindMismatch { key: String },
}

impl GenerateError {
    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            GenerateError::DuplicateRestriction { .. } => ErrorCode::DuplicateRestriction,
            GenerateError::NonPositiveRestriction { .. } => ErrorCode::NonPositiveRestriction,
            GenerateError::SchemaNotAnObject { .. } => ErrorCode::SchemaNotAnObject,
            GenerateError::InvalidFieldName { .. } => ErrorCode::InvalidFieldName,
            GenerateError::NotAListOfValues { .. } => ErrorCode::NotAListOfValues,
            GenerateError::EmptyDomain { .. } => ErrorCode::EmptyDomain,
            GenerateError::InsufficientVariants { .. } => ErrorCode::InsufficientVariants,
            GenerateError::DuplicateVariantRegistration { .. } => {
                ErrorCode::DuplicateVariantRegistration
            }
            GenerateError::MultipleVariantsForSingularField { .. } => {
                ErrorCode::MultipleVariantsForSingularField
            }
            GenerateError::UnknownVariantReference { .. } => ErrorCode::UnknownVariantReference,
            GenerateError::RowValueKindMismatch { .. } => ErrorCode::RowValueKindMismatch,
        }
    }

    /// Whether this failure indicates an encoding bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.error_code(),
            ErrorCode::DuplicateVariantRegistration
                | ErrorCode::MultipleVariantsForSingularField
                | ErrorCode::UnknownVariantReference
                | ErrorCode::RowValueKindMismatch
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================
