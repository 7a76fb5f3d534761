//! Pairwise combination engine: contract and built-in implementation.
//!
//! The expansion pipeline only depends on the [`CombinationEngine`] trait, so
//! an alternative covering-array generator can be plugged in via
//! [`crate::generate_with_engine`]. [`IpogEngine`] is the default shipped
//! implementation.

use std::collections::BTreeSet;

use crate::space::{ParamSpace, Row};

/// Contract of the external pairwise-combination collaborator.
///
/// Required guarantee: for every pair of parameters `(a, b)` and every pair
/// of values `(va, vb)` from their domains, at least one returned row assigns
/// `row[a] = va` and `row[b] = vb`. Rows carry exactly one value per
/// parameter. No row ordering is guaranteed and coverage may repeat
/// incidentally. Domains of size 1 and domains containing
/// [`crate::ParamValue::Skip`] need no special casing.
pub trait CombinationEngine {
    fn rows(&self, space: &ParamSpace) -> Vec<Row>;
}

/// In-parameter-order greedy pairwise generator.
///
/// Seeds the row set with the cartesian product of the first two parameter
/// domains, then covers each further parameter in two phases: horizontal
/// growth assigns to every existing row the value covering the most still
/// uncovered pairs, and vertical growth appends rows until every pair
/// involving the new parameter is covered. Deterministic for a given input;
/// row count is near-minimal, never minimal by guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpogEngine;

impl CombinationEngine for IpogEngine {
    fn rows(&self, space: &ParamSpace) -> Vec<Row> {
        let sizes: Vec<usize> = space.params().iter().map(|p| p.domain.len()).collect();

        let index_rows = match sizes.len() {
            0 => Vec::new(),
            1 => (0..sizes[0]).map(|v| vec![v]).collect(),
            _ => {
                let mut rows = Vec::with_capacity(sizes[0] * sizes[1]);
                for a in 0..sizes[0] {
                    for b in 0..sizes[1] {
                        rows.push(vec![a, b]);
                    }
                }
                for p in 2..sizes.len() {
                    cover_parameter(&mut rows, &sizes, p);
                }
                rows
            }
        };

        tracing::debug!(
            params = sizes.len(),
            rows = index_rows.len(),
            "pairwise rows generated"
        );

        index_rows
            .into_iter()
            .map(|indices| {
                space
                    .params()
                    .iter()
                    .zip(indices)
                    .map(|(param, v)| (param.name.clone(), param.domain[v].clone()))
                    .collect()
            })
            .collect()
    }
}

/// Extend every row with a value for parameter `p`, then append rows until
/// all pairs between `p` and the earlier parameters are covered.
///
/// Pairs are tracked as `(q, vq, vp)` triples with `q < p`. Earlier-parameter
/// pairs stay covered because rows are only extended and appended, never
/// removed.
fn cover_parameter(rows: &mut Vec<Vec<usize>>, sizes: &[usize], p: usize) {
    let dp = sizes[p];

    let mut uncovered: BTreeSet<(usize, usize, usize)> = BTreeSet::new();
    for q in 0..p {
        for vq in 0..sizes[q] {
            for vp in 0..dp {
                uncovered.insert((q, vq, vp));
            }
        }
    }

    // Horizontal growth: best value for each existing row, ties to the
    // lowest index for determinism.
    for row in rows.iter_mut() {
        let mut best = 0;
        let mut best_gain = 0;
        for vp in 0..dp {
            let gain = (0..p)
                .filter(|&q| uncovered.contains(&(q, row[q], vp)))
                .count();
            if gain > best_gain {
                best = vp;
                best_gain = gain;
            }
        }
        for q in 0..p {
            uncovered.remove(&(q, row[q], best));
        }
        row.push(best);
    }

    // Vertical growth: one new row per remaining seed pair, greedily packing
    // further uncovered pairs that share the same value of `p`.
    while let Some(&(q0, vq0, vp)) = uncovered.iter().next() {
        let mut row = vec![0; p];
        row[q0] = vq0;
        for q in (0..p).filter(|&q| q != q0) {
            if let Some(vq) = (0..sizes[q]).find(|&vq| uncovered.contains(&(q, vq, vp))) {
                row[q] = vq;
            }
        }
        for q in 0..p {
            uncovered.remove(&(q, row[q], vp));
        }
        row.push(vp);
        rows.push(row);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
