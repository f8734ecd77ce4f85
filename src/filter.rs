use serde::{Deserialize, Serialize};

use crate::color::Colour;
use crate::error::PickError;

/// Optional saturation/lightness bounds. `None` means no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_saturation: Option<f64>,
    pub max_lightness: Option<f64>,
    pub min_lightness: Option<f64>,
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), PickError> {
        let bounds = [
            ("min_saturation", self.min_saturation),
            ("max_lightness", self.max_lightness),
            ("min_lightness", self.min_lightness),
        ];
        for (name, value) in bounds {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    return Err(PickError::InvalidThreshold { name, value });
                }
            }
        }
        Ok(())
    }

    /// Whether `colour` passes every bound that is set.
    pub fn admits(&self, colour: &Colour) -> bool {
        self.min_saturation.map_or(true, |s| colour.saturation() >= s)
            && self.max_lightness.map_or(true, |l| colour.lightness() <= l)
            && self.min_lightness.map_or(true, |l| colour.lightness() >= l)
    }
}

/// The working population subsets are drawn from. Always holds at least two
/// colours; order is the order the caller supplied them in.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    colours: Vec<Colour>,
}

impl CandidateSet {
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Colour> {
        self.colours.get(index)
    }
}

/// Keep the colours that satisfy `thresholds`, in the order given.
pub fn filter_palette(
    colours: Vec<Colour>,
    thresholds: &Thresholds,
) -> Result<CandidateSet, PickError> {
    thresholds.validate()?;

    let before = colours.len();
    let kept: Vec<Colour> = colours
        .into_iter()
        .filter(|c| thresholds.admits(c))
        .collect();
    tracing::debug!(before, after = kept.len(), ?thresholds, "Filtered candidate palette");

    match kept.len() {
        0 => Err(PickError::EmptyResult),
        1 => Err(PickError::InsufficientCandidates { remaining: 1 }),
        _ => Ok(CandidateSet { colours: kept }),
    }
}
