use crate::{
    graph::{Distances, Node, Tour},
    Cost,
};

/// First-improvement 2-opt on an open path. The first node is never moved.
///
/// A round scans first cuts `i` in increasing order. For a fixed `i` every improving
/// reversal of `i..=j` is adopted immediately and the scan over `j` continues against the
/// new tour. The round ends after the first `i` that improved anything; the search stops
/// once a full round finds no improvement.
pub struct TwoOpt<'b, D> {
    current_tour: Vec<Node>,
    current_cost: Cost,
    start_cost: Cost,
    round: usize,
    dist: &'b D,
}

impl<'b, D> TwoOpt<'b, D>
where
    D: Distances,
{
    pub fn with_distances(start_tour: Tour, dist: &'b D) -> Self {
        TwoOpt {
            current_cost: start_tour.cost(),
            start_cost: start_tour.cost(),
            current_tour: start_tour.into_iter().collect(),
            round: 0,
            dist,
        }
    }

    pub fn current_tour(&self) -> Tour {
        Tour::new(self.current_tour.clone(), self.current_cost)
    }

    pub fn run(&mut self) -> Tour {
        log::info!("Starting 2-OPT. Initial tour cost: {}", self.current_cost);
        self.round = 0;

        loop {
            self.round += 1;
            if !self.improve() {
                log::debug!("Round {}: no improvement could be made.", self.round);
                break;
            }
            log::debug!("Round {}: {}", self.round, self.current_cost);
        }

        log::info!(
            "2-OPT results after {} rounds: {} -> {}",
            self.round,
            self.start_cost,
            self.current_cost
        );
        self.current_tour()
    }

    fn improve(&mut self) -> bool {
        let n = self.current_tour.len();
        for i in 1..n.saturating_sub(1) {
            let mut improved = false;
            for j in i + 1..n {
                two_opt_swap(&mut self.current_tour, i, j);
                let cost = self.dist.path_cost(&self.current_tour);
                if cost < self.current_cost {
                    self.current_cost = cost;
                    improved = true;
                } else {
                    two_opt_swap(&mut self.current_tour, i, j);
                }
            }
            if improved {
                return true;
            }
        }
        false
    }
}

/// Reverses `nodes[i..=j]`.
fn two_opt_swap(nodes: &mut [Node], i: usize, j: usize) {
    nodes[i..=j].reverse();
}
