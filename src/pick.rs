use rand::Rng;

use crate::color::{parse_palette, Colour};
use crate::config::{check_subset_size, PickOptions};
use crate::distance::DistanceMatrix;
use crate::error::PickError;
use crate::filter::{filter_palette, CandidateSet};
use crate::sample::{sample_and_score, ScoredSubset};
use crate::select::{select_top, Picked, SelectionWarning};

/// A chosen palette with the numbers that got it chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPalette {
    /// Members in candidate order
    pub colours: Vec<Colour>,
    /// Mean pairwise ΔE
    pub mpd: f64,
    /// Smallest pairwise ΔE
    pub min_delta_e: f64,
    /// Draw that first produced this score
    pub draw: usize,
}

impl ScoredPalette {
    fn from_scored(scored: &ScoredSubset, candidates: &CandidateSet, dm: &DistanceMatrix) -> Self {
        let indices = scored.subset.indices();
        Self {
            colours: indices
                .iter()
                .filter_map(|&i| candidates.get(i).cloned())
                .collect(),
            mpd: scored.score,
            min_delta_e: dm.min_within(&indices),
            draw: scored.draw,
        }
    }

    pub fn hex_codes(&self) -> Vec<String> {
        self.colours.iter().map(|c| c.hex().to_string()).collect()
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub picked: Picked,
    /// The same palettes as `picked`, in the same order, with scores
    pub palettes: Vec<ScoredPalette>,
    pub warning: Option<SelectionWarning>,
    pub seed: u64,
    pub candidates: usize,
    pub subset_size: usize,
}

impl Outcome {
    /// Palettes best first. The run itself returns them in sampling order.
    pub fn sorted_by_score(&self) -> Vec<&ScoredPalette> {
        let mut sorted: Vec<&ScoredPalette> = self.palettes.iter().collect();
        sorted.sort_by(|a, b| b.mpd.total_cmp(&a.mpd));
        sorted
    }
}

/// Choose the most perceptually spread-out subset(s) of `palette`.
///
/// ```
/// use distinct_palette::{pick_palette, Picked, PickOptions};
///
/// let colours = ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"];
/// let options = PickOptions::default()
///     .with_subset_size(2)
///     .with_repetitions(1000)
///     .with_seed(1);
/// let outcome = pick_palette(&colours, &options).unwrap();
/// assert_eq!(outcome.picked, Picked::Single(vec!["#00FF00".into(), "#0000FF".into()]));
/// ```
pub fn pick_palette<S: AsRef<str>>(
    palette: &[S],
    options: &PickOptions,
) -> Result<Outcome, PickError> {
    options.validate()?;
    let subset_size = options.resolved_subset_size(palette.len())?;

    let colours = parse_palette(palette)?;
    let candidates = filter_palette(colours, &options.thresholds())?;
    check_subset_size(subset_size, candidates.len())?;

    let dm = DistanceMatrix::build(&candidates);

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(
        seed,
        repetitions = options.repetitions,
        subset_size,
        candidates = candidates.len(),
        "Sampling subsets"
    );
    let scored = sample_and_score(&dm, subset_size, options.repetitions, seed);

    let selection = select_top(scored, options.n_return);
    let palettes: Vec<ScoredPalette> = selection
        .chosen
        .iter()
        .map(|s| ScoredPalette::from_scored(s, &candidates, &dm))
        .collect();

    let picked = if options.n_return == 1 {
        Picked::Single(palettes.first().map(ScoredPalette::hex_codes).unwrap_or_default())
    } else {
        Picked::Many(palettes.iter().map(ScoredPalette::hex_codes).collect())
    };

    tracing::info!(
        palettes = palettes.len(),
        best_mpd = palettes.iter().map(|p| p.mpd).fold(f64::NAN, f64::max),
        "Picked palettes"
    );

    Ok(Outcome {
        picked,
        palettes,
        warning: selection.warning,
        seed,
        candidates: candidates.len(),
        subset_size,
    })
}
