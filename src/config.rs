use serde::{Deserialize, Serialize};

use crate::error::PickError;
use crate::filter::Thresholds;

// ============================================================================
// DEFAULTS - the values used when an option is left unset
// ============================================================================

pub struct Defaults;

impl Defaults {
    /// Subsets drawn per run
    pub const REPETITIONS: usize = 10_000;

    /// Palettes returned per run
    pub const RETURN_COUNT: usize = 1;

    /// Smallest meaningful palette
    pub const MIN_SUBSET_SIZE: usize = 2;

    /// Half the input palette, rounded up
    pub fn subset_size(palette_len: usize) -> usize {
        palette_len.div_ceil(2)
    }
}

// ============================================================================

/// Parameters of one palette pick.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use distinct_palette::PickOptions;
///
/// let options = PickOptions::from_json(r#"{ "subset_size": 4, "seed": 7 }"#).unwrap();
/// assert_eq!(options.subset_size, Some(4));
/// assert_eq!(options.repetitions, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickOptions {
    /// Drop colours with HSL saturation below this
    pub min_saturation: Option<f64>,
    /// Drop colours with HSL lightness above this
    pub max_lightness: Option<f64>,
    /// Drop colours with HSL lightness below this
    pub min_lightness: Option<f64>,
    pub repetitions: usize,
    /// Colours per palette; `None` means half the input, rounded up
    pub subset_size: Option<usize>,
    pub n_return: usize,
    /// Master seed; `None` draws one from the thread-local generator
    pub seed: Option<u64>,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            min_saturation: None,
            max_lightness: None,
            min_lightness: None,
            repetitions: Defaults::REPETITIONS,
            subset_size: None,
            n_return: Defaults::RETURN_COUNT,
            seed: None,
        }
    }
}

impl PickOptions {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn with_min_saturation(mut self, value: f64) -> Self {
        self.min_saturation = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_lightness(mut self, value: f64) -> Self {
        self.max_lightness = Some(value);
        self
    }

    #[must_use]
    pub fn with_min_lightness(mut self, value: f64) -> Self {
        self.min_lightness = Some(value);
        self
    }

    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    #[must_use]
    pub fn with_subset_size(mut self, size: usize) -> Self {
        self.subset_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_n_return(mut self, n_return: usize) -> Self {
        self.n_return = n_return;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_saturation: self.min_saturation,
            max_lightness: self.max_lightness,
            min_lightness: self.min_lightness,
        }
    }

    /// Check everything that can be checked before looking at colours.
    pub fn validate(&self) -> Result<(), PickError> {
        if self.repetitions == 0 {
            return Err(PickError::InvalidRepetitions);
        }
        if self.n_return == 0 {
            return Err(PickError::InvalidReturnCount);
        }
        self.thresholds().validate()
    }

    /// Subset size for an input palette of `palette_len` colours, checked
    /// against that length.
    pub fn resolved_subset_size(&self, palette_len: usize) -> Result<usize, PickError> {
        let size = self
            .subset_size
            .unwrap_or_else(|| Defaults::subset_size(palette_len));
        check_subset_size(size, palette_len)?;
        Ok(size)
    }
}

pub(crate) fn check_subset_size(size: usize, available: usize) -> Result<(), PickError> {
    if size < Defaults::MIN_SUBSET_SIZE || size > available {
        return Err(PickError::InvalidSubsetSize { size, available });
    }
    Ok(())
}
