use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::sample::ScoredSubset;

/// The final answer: one palette when a single palette was requested,
/// otherwise a list of palettes in sampling order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Picked {
    Single(Vec<String>),
    Many(Vec<Vec<String>>),
}

impl Picked {
    /// All palettes, whatever the shape.
    pub fn palettes(&self) -> Vec<&[String]> {
        match self {
            Picked::Single(p) => vec![p.as_slice()],
            Picked::Many(ps) => ps.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// Non-fatal conditions that change the shape of the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionWarning {
    #[error("fewer than requested distinct palettes were found ({found} of {requested}); returning all available")]
    FewerDistinct { requested: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Chosen subsets, ordered by the draw that first produced their score.
    pub chosen: Vec<ScoredSubset>,
    pub warning: Option<SelectionWarning>,
}

fn score_key(score: f64) -> u64 {
    // -0.0 and 0.0 are the same score
    if score == 0.0 {
        0
    } else {
        score.to_bits()
    }
}

/// One representative per distinct score, in order of first occurrence.
pub fn distinct_by_score(scored: Vec<ScoredSubset>) -> Vec<ScoredSubset> {
    let mut seen = HashSet::new();
    scored
        .into_iter()
        .filter(|s| seen.insert(score_key(s.score)))
        .collect()
}

/// Keep every entry whose rank by descending score is at most `keep`.
///
/// Ranks use the "min" method (1 + number of strictly higher scores), so
/// entries tied at the cutoff are all kept and the result can exceed `keep`.
/// Input order is preserved.
fn keep_ranked(candidates: Vec<ScoredSubset>, keep: usize) -> Vec<ScoredSubset> {
    let mut descending: Vec<f64> = candidates.iter().map(|s| s.score).collect();
    descending.sort_by(|a, b| b.total_cmp(a));
    candidates
        .into_iter()
        .filter(|s| {
            let rank = descending.partition_point(|&x| x > s.score) + 1;
            rank <= keep
        })
        .collect()
}

/// Pick the `n_return` best distinct-score subsets from `scored`, which must
/// be in draw order.
pub fn select_top(scored: Vec<ScoredSubset>, n_return: usize) -> Selection {
    let distinct = distinct_by_score(scored);
    let found = distinct.len();

    let warning = (found < n_return).then(|| {
        let warning = SelectionWarning::FewerDistinct {
            requested: n_return,
            found,
        };
        tracing::warn!(requested = n_return, found, "{warning}");
        warning
    });

    let chosen = keep_ranked(distinct, n_return.min(found));
    Selection { chosen, warning }
}
