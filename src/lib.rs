//! distinct-palette: pick perceptually distinct colour subsets
//!
//! Given a candidate palette of hex colours, this crate searches for the
//! subset of a requested size whose colours sit furthest apart on average in
//! CIE Lab, scoring each subset by its mean pairwise ΔE (CIE76).
//!
//! The search is a randomized approximation, not an exhaustive one:
//!
//! ```text
//! hex codes ──> filter (HSL saturation / lightness)
//!                 │
//!                 ├──> distance matrix (ΔE in Lab)
//!                 │         │
//!                 └──> R random subsets ──> mean pairwise ΔE per subset
//!                                               │
//!                                 distinct scores, top N, in draw order
//! ```
//!
//! Draws run in parallel on rayon's pool. Every draw owns a generator seeded
//! from the run's master seed and its draw index, so a fixed seed gives the
//! same answer on any number of threads.
//!
//! # Example
//!
//! ```
//! use distinct_palette::{pick_palette, Picked, PickOptions};
//!
//! let colours = ["#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33"];
//! let options = PickOptions::default().with_subset_size(3).with_seed(42);
//!
//! let outcome = pick_palette(&colours, &options).unwrap();
//! match outcome.picked {
//!     Picked::Single(palette) => assert_eq!(palette.len(), 3),
//!     Picked::Many(_) => unreachable!("one palette was requested"),
//! }
//! ```
//!
//! # Result order
//!
//! When more than one palette is requested they come back in the order they
//! were first sampled, not by score. Use [`Outcome::sorted_by_score`] for a
//! ranking.

pub mod color;
pub mod config;
pub mod distance;
pub mod error;
pub mod filter;
pub mod io;
pub mod pick;
pub mod sample;
pub mod select;

pub use color::{candidate_srgb_grid, Colour};
pub use config::{Defaults, PickOptions};
pub use distance::DistanceMatrix;
pub use error::PickError;
pub use filter::{filter_palette, CandidateSet, Thresholds};
pub use pick::{pick_palette, Outcome, ScoredPalette};
pub use sample::{mean_pairwise_distance, sample_and_score, ScoredSubset, Subset};
pub use select::{select_top, Picked, Selection, SelectionWarning};
