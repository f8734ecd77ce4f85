use crate::color::{delta_e, PerceptualLab};
use crate::filter::CandidateSet;

/// Dense symmetric matrix of pairwise ΔE values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    dm: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute pairwise distance matrix for Lab colors
    pub fn from_labs(labs: &[PerceptualLab]) -> Self {
        let n = labs.len();
        let mut dm = vec![0.0f64; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = delta_e(labs[i], labs[j]);
                dm[i * n + j] = d;
                dm[j * n + i] = d;
            }
        }
        Self { n, dm }
    }

    pub fn build(candidates: &CandidateSet) -> Self {
        let labs: Vec<PerceptualLab> = candidates.colours().iter().map(|c| c.lab()).collect();
        let matrix = Self::from_labs(&labs);
        tracing::debug!(size = matrix.n, "Built distance matrix");
        matrix
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between candidates `i` and `j`.
    ///
    /// # Panics
    ///
    /// If either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) outside {0}x{0}", self.n);
        self.dm[i * self.n + j]
    }

    /// Find minimum distance within a group using the distance matrix
    pub fn min_within(&self, group: &[usize]) -> f64 {
        let mut min_d = f64::INFINITY;
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                let d = self.get(group[i], group[j]);
                if d < min_d {
                    min_d = d;
                }
            }
        }
        min_d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{parse_palette, srgb_u8_to_lab};
    use crate::filter::{filter_palette, Thresholds};
    use palette::Srgb;

    fn matrix(codes: &[&str]) -> DistanceMatrix {
        let set = filter_palette(parse_palette(codes).unwrap(), &Thresholds::default()).unwrap();
        DistanceMatrix::build(&set)
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let dm = matrix(&["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#123456"]);
        assert_eq!(dm.len(), 5);
        for i in 0..dm.len() {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.len() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
                assert!(dm.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn entries_are_lab_distances() {
        let dm = matrix(&["#000000", "#FFFFFF"]);
        let black = srgb_u8_to_lab(Srgb::new(0, 0, 0));
        let white = srgb_u8_to_lab(Srgb::new(255, 255, 255));
        assert_eq!(dm.get(0, 1), delta_e(black, white));
        assert!((dm.get(0, 1) - 100.0).abs() < 0.01);
    }

    #[test]
    fn duplicates_sit_at_zero_distance() {
        let dm = matrix(&["#ABCDEF", "#ABCDEF", "#000000"]);
        assert_eq!(dm.get(0, 1), 0.0);
        assert!(dm.get(0, 2) > 0.0);
    }

    #[test]
    fn min_within_picks_closest_pair() {
        let dm = matrix(&["#000000", "#FFFFFF", "#FEFEFE"]);
        assert_eq!(dm.min_within(&[0, 1, 2]), dm.get(1, 2));
        assert_eq!(dm.min_within(&[0, 1]), dm.get(0, 1));
        assert_eq!(dm.min_within(&[0]), f64::INFINITY);
    }
}
