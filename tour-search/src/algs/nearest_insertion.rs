use crate::{
    dist::DistanceMatrix,
    graph::{Distances, Node, PointSet, Tour},
    progress::{Progress, ProgressEvent},
    Result, SolveError,
};

use super::Strategy;

pub fn nearest_insertion(points: &PointSet, progress: &mut dyn Progress) -> Result<Tour> {
    let total = points.len();
    if total < 2 {
        return Err(SolveError::InsufficientNodes {
            strategy: "nearest insertion",
            required: 2,
            actual: total,
        });
    }
    log::info!("Start nearest insertion over {} points.", total);

    let dist = DistanceMatrix::compute_all_pairs(points);
    let mut remaining: Vec<Node> = points.nodes().collect();
    let mut path = vec![remaining.remove(0)];

    if let Some(k) = closest_node(&dist, &remaining, &path) {
        path.push(remaining.remove(k));
    }

    while let Some(k) = closest_node(&dist, &remaining, &path) {
        let node = remaining.remove(k);
        let pos = cheapest_edge(&dist, node, &path);
        path.insert(pos + 1, node);
        log::trace!("Inserted {} after position {}", node, pos);
        progress.report(ProgressEvent::Inserted {
            placed: path.len(),
            total,
        });
    }

    let tour = Tour::with_cost_from(path, &dist);
    log::info!("Nearest insertion tour cost: {}", tour.cost());
    Ok(tour)
}

/// Position in `candidates` of the node with the smallest summed distance to all of `path`.
fn closest_node<D>(dist: &D, candidates: &[Node], path: &[Node]) -> Option<usize>
where
    D: Distances,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, &candidate) in candidates.iter().enumerate() {
        let total: f64 = path
            .iter()
            .map(|&p| dist.distance(candidate, p).as_float())
            .sum();
        match best {
            Some((_, best_total)) if best_total <= total => {}
            _ => best = Some((i, total)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index `i` of the edge `(path[i], path[i + 1])` where inserting `node` adds the least cost.
fn cheapest_edge<D>(dist: &D, node: Node, path: &[Node]) -> usize
where
    D: Distances,
{
    let mut best = 0;
    let mut best_delta = f64::INFINITY;
    for (i, e) in path.windows(2).enumerate() {
        let delta = dist.distance(e[0], node).as_float() + dist.distance(node, e[1]).as_float()
            - dist.distance(e[0], e[1]).as_float();
        if delta < best_delta {
            best = i;
            best_delta = delta;
        }
    }
    best
}

/// Grows a path from the first point by repeatedly inserting the remaining point closest to
/// the whole path at its cheapest edge. Needs at least two points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInsertion;

impl Strategy for NearestInsertion {
    fn solve(&mut self, points: &PointSet, progress: &mut dyn Progress) -> Result<Tour> {
        nearest_insertion(points, progress)
    }
}
