use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

use crate::{
    graph::{PointSet, Tour},
    progress::Progress,
    Result,
};

mod annealing;
mod brute;
mod local_search;
mod nearest_insertion;
mod nearest_neighbor;

pub use annealing::{AnnealingConfig, SimulatedAnnealing};
pub use brute::{brute_force, BruteForce};
pub use local_search::{two_opt, LocalSearch};
pub use nearest_insertion::{nearest_insertion, NearestInsertion};
pub use nearest_neighbor::{nearest_neighbor, NearestNeighbor};

/// A strategy computing an open tour through every point of a point set.
pub trait Strategy {
    /// Computes a tour visiting every point exactly once. The tour carries its cost.
    ///
    /// `progress` receives intermediate state; what is reported there never changes the
    /// returned tour.
    fn solve(&mut self, points: &PointSet, progress: &mut dyn Progress) -> Result<Tour>;
}

/// Identifies one of the available strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Brute,
    NearestNeighbor,
    TwoOpt,
    Annealing,
    NearestInsertion,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::NearestNeighbor
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::NearestNeighbor,
        Algorithm::TwoOpt,
        Algorithm::Brute,
        Algorithm::Annealing,
        Algorithm::NearestInsertion,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Brute => "brute",
            Algorithm::NearestNeighbor => "nearest_n",
            Algorithm::TwoOpt => "2opt",
            Algorithm::Annealing => "sim",
            Algorithm::NearestInsertion => "nearest_i",
        }
    }

    /// Creates the strategy. Only simulated annealing uses `rng` and `config`.
    pub fn into_strategy<'r, R>(self, rng: R, config: AnnealingConfig) -> Box<dyn Strategy + 'r>
    where
        R: Rng + 'r,
    {
        match self {
            Algorithm::Brute => Box::new(BruteForce),
            Algorithm::NearestNeighbor => Box::new(NearestNeighbor),
            Algorithm::TwoOpt => Box::new(LocalSearch),
            Algorithm::Annealing => Box::new(SimulatedAnnealing::with_config(config, rng)),
            Algorithm::NearestInsertion => Box::new(NearestInsertion),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}`, choose from [nearest_n, 2opt, brute, sim, nearest_i]")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;
    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.identifier() == name)
            .ok_or_else(|| ParseAlgorithmError(name.to_string()))
    }
}
