use crate::{
    dist::DistanceMatrix,
    graph::{PointSet, Tour},
    progress::Progress,
    two_opt::TwoOpt,
    Result,
};

use super::Strategy;

/// Runs 2-opt starting from the points in loaded order.
pub fn two_opt(points: &PointSet) -> Tour {
    let dist = DistanceMatrix::compute_all_pairs(points);
    let start = Tour::with_cost_from(points.nodes().collect(), &dist);
    TwoOpt::with_distances(start, &dist).run()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearch;

impl Strategy for LocalSearch {
    fn solve(&mut self, points: &PointSet, _progress: &mut dyn Progress) -> Result<Tour> {
        Ok(two_opt(points))
    }
}
