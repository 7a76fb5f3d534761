//! Flat parameter space: the only structure the combination engine sees.
//!
//! Every recursion level accumulates its leaf parameters and synthetic
//! position parameters into one [`ParamSpace`]. Names are unique by
//! construction: leaf names are level-local and dot-free, position names are
//! dot-qualified by their field path, so the key-union merge needs no
//! conflict handling.

use std::collections::BTreeMap;

use serde_json::Value;

/// One candidate value in a parameter's domain.
///
/// Position-parameter domains hold `Variant` indices into the variant
/// registry, optionally led by `Skip`; leaf domains hold `Literal`s. The
/// explicit `Skip` variant replaces an in-band integer sentinel so an
/// optional slot can never collide with a legitimate variant index.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A literal leaf value, copied verbatim into results.
    Literal(Value),
    /// Index of a precomputed variant object for this slot.
    Variant(usize),
    /// This optional slot contributes no variant.
    Skip,
}

/// A named parameter with its ordered domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub domain: Vec<ParamValue>,
}

/// Ordered collection of independent parameters for one schema level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSpace {
    params: Vec<Param>,
}

impl ParamSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Callers guarantee name uniqueness by construction.
    pub fn push(&mut self, name: String, domain: Vec<ParamValue>) {
        debug_assert!(
            self.params.iter().all(|p| p.name != name),
            "duplicate parameter name {name}"
        );
        self.params.push(Param { name, domain });
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// One full assignment produced by the combination engine: parameter name to
/// one value drawn from that parameter's domain.
pub type Row = BTreeMap<String, ParamValue>;

// ===========================================================================
// Tests
// ===========================================================================
