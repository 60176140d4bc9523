use itertools::Itertools;

use crate::{
    dist::DistanceMatrix,
    graph::{Distances, PointSet, Tour},
    progress::Progress,
    Result,
};

use super::Strategy;

/// Number of points above which exhaustive search gets noticeably slow.
const BRUTE_FORCE_WARN_SIZE: usize = 10;

pub fn brute_force(points: &PointSet) -> Tour {
    let n = points.len();
    if n > BRUTE_FORCE_WARN_SIZE {
        log::warn!("Enumerating all {}! orderings, this may take a while.", n);
    }
    log::info!("Start exhaustive search over {} points.", n);

    let dist = DistanceMatrix::compute_all_pairs(points);
    let mut best: Option<Tour> = None;
    for perm in points.nodes().permutations(n) {
        let cost = dist.path_cost(&perm);
        if best.as_ref().map_or(true, |b| cost < b.cost()) {
            log::trace!("New best ordering with cost {}", cost);
            best = Some(Tour::new(perm, cost));
        }
    }

    let tour = best.unwrap_or_else(Tour::empty);
    log::info!("Finished exhaustive search. Optimal cost: {}", tour.cost());
    tour
}

/// Exhaustive search over every ordering of the points.
///
/// **Note**: runs in `O(n! * n)`. Orderings are enumerated in lexicographic order of the
/// point positions and the first ordering of minimum cost is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Strategy for BruteForce {
    fn solve(&mut self, points: &PointSet, _progress: &mut dyn Progress) -> Result<Tour> {
        Ok(brute_force(points))
    }
}

#[cfg(test)]
mod test_brute {
    use super::*;
    use crate::{graph::Point, Cost};

    #[test]
    fn test_triangle() {
        let points: PointSet = vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 3.0),
            Point::new("C", 4.0, 0.0),
        ]
        .into_iter()
        .collect();
        let tour = brute_force(&points);
        assert_eq!(tour.cost(), Cost::new(7.0));
        // [B, A, C] comes before its reverse [C, A, B]
        let names: Vec<&str> = tour.points(&points).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_start_not_fixed() {
        let points: PointSet = vec![
            Point::new("mid", 5.0, 0.0),
            Point::new("left", 0.0, 0.0),
            Point::new("right", 10.0, 0.0),
        ]
        .into_iter()
        .collect();
        let tour = brute_force(&points);
        assert_eq!(tour.cost(), Cost::new(10.0));
        assert_eq!(tour.get(1), Some(0.into()));
    }

    #[test]
    fn test_degenerate() {
        let empty = brute_force(&PointSet::default());
        assert!(empty.is_empty());
        assert_eq!(empty.cost(), Cost::zero());

        let single: PointSet = vec![Point::new("A", 1.0, 2.0)].into_iter().collect();
        let tour = brute_force(&single);
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.cost(), Cost::zero());
    }
}
