use crate::{
    dist::DistanceMatrix,
    graph::{Distances, Node, PointSet, Tour},
    progress::Progress,
    Cost, Result,
};

use super::Strategy;

pub fn nearest_neighbor(points: &PointSet) -> Tour {
    let dist = DistanceMatrix::compute_all_pairs(points);
    nearest_neighbor_tour(&dist, points.nodes().collect())
}

/// Builds a tour starting at the first of `remaining` by always moving to the closest
/// unvisited node. Ties go to the node that comes first in `remaining`.
pub(crate) fn nearest_neighbor_tour<D>(dist: &D, mut remaining: Vec<Node>) -> Tour
where
    D: Distances,
{
    if remaining.is_empty() {
        return Tour::empty();
    }

    let mut current = remaining.remove(0);
    let mut nodes = vec![current];
    let mut cost = Cost::zero();

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_cost = dist.distance(current, remaining[0]);
        for (i, &node) in remaining.iter().enumerate().skip(1) {
            let c = dist.distance(current, node);
            if c < best_cost {
                best = i;
                best_cost = c;
            }
        }

        current = remaining.remove(best);
        cost += best_cost;
        nodes.push(current);
    }

    log::info!("Nearest neighbor tour cost: {}", cost);
    Tour::new(nodes, cost)
}

/// Greedy construction anchored at the first point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl Strategy for NearestNeighbor {
    fn solve(&mut self, points: &PointSet, _progress: &mut dyn Progress) -> Result<Tour> {
        Ok(nearest_neighbor(points))
    }
}

#[cfg(test)]
mod test_nearest_neighbor {
    use super::*;
    use crate::graph::Point;

    #[test]
    fn test_triangle() {
        let points: PointSet = vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 3.0),
            Point::new("C", 4.0, 0.0),
        ]
        .into_iter()
        .collect();
        let tour = nearest_neighbor(&points);
        let names: Vec<&str> = tour.points(&points).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(tour.cost(), Cost::new(8.0));
    }

    #[test]
    fn test_tie_first_wins() {
        let points: PointSet = vec![
            Point::new("O", 0.0, 0.0),
            Point::new("E", 1.0, 0.0),
            Point::new("W", -1.0, 0.0),
        ]
        .into_iter()
        .collect();
        let tour = nearest_neighbor(&points);
        assert_eq!(tour.nodes(), &[Node::new(0), Node::new(1), Node::new(2)]);
        assert_eq!(tour.cost(), Cost::new(3.0));
    }

    #[test]
    fn test_degenerate() {
        assert!(nearest_neighbor(&PointSet::default()).is_empty());

        let single: PointSet = vec![Point::new("A", 1.0, 2.0)].into_iter().collect();
        let tour = nearest_neighbor(&single);
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.cost(), Cost::zero());
    }
}
