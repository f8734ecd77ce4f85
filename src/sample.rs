use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::distance::DistanceMatrix;

/// Membership vector over the candidate ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    members: Vec<bool>,
}

impl Subset {
    /// # Panics
    ///
    /// If any index is `>= n`.
    pub fn from_indices(n: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut members = vec![false; n];
        for i in indices {
            members[i] = true;
        }
        Self { members }
    }

    pub fn members(&self) -> &[bool] {
        &self.members
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.get(index).copied().unwrap_or(false)
    }

    /// Indices of the members, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }
}

/// One sampled subset together with its score and the draw that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubset {
    pub draw: usize,
    pub subset: Subset,
    pub score: f64,
}

/// Draw `k` of `n` candidates uniformly without replacement.
pub fn sample_subset<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Subset {
    let picked = rand::seq::index::sample(rng, n, k);
    Subset::from_indices(n, picked.into_iter())
}

/// Mean of the pairwise distances between the members of `subset`.
///
/// Pairs are visited in ascending index order, so equal subsets always give
/// bit-identical scores.
pub fn mean_pairwise_distance(dm: &DistanceMatrix, subset: &Subset) -> f64 {
    let idx = subset.indices();
    let k = idx.len();
    if k < 2 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for a in 0..k {
        for b in (a + 1)..k {
            sum += dm.get(idx[a], idx[b]);
        }
    }
    sum / (k * (k - 1) / 2) as f64
}

/// Seed for draw `draw`, derived from the run's master seed.
pub fn draw_seed(master: u64, draw: usize) -> u64 {
    // splitmix64 finaliser over the combined value
    let mut z = master.wrapping_add((draw as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Sample `repetitions` subsets of size `k` and score each one.
///
/// Draws run in parallel, each with its own generator; the returned vector is
/// in draw order whatever the thread count.
pub fn sample_and_score(
    dm: &DistanceMatrix,
    k: usize,
    repetitions: usize,
    master_seed: u64,
) -> Vec<ScoredSubset> {
    let n = dm.len();
    (0..repetitions)
        .into_par_iter()
        .map(|draw| {
            let mut rng = StdRng::seed_from_u64(draw_seed(master_seed, draw));
            let subset = sample_subset(&mut rng, n, k);
            let score = mean_pairwise_distance(dm, &subset);
            ScoredSubset {
                draw,
                subset,
                score,
            }
        })
        .collect()
}
