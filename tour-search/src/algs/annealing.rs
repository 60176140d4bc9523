use rand::{seq::index, Rng};

use crate::{
    dist::DistanceMatrix,
    graph::{Distances, Node, PointSet, Tour},
    progress::{Progress, ProgressEvent},
    Cost, Result,
};

use super::{nearest_neighbor::nearest_neighbor_tour, Strategy};

/// Cooling schedule of [`SimulatedAnnealing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingConfig {
    pub initial_temperature: f64,
    /// Fraction of the temperature lost per iteration.
    pub cooling_rate: f64,
    /// The search runs while the temperature is above this value.
    pub min_temperature: f64,
    /// A nonzero cost change below this value counts as convergence.
    pub convergence_epsilon: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        AnnealingConfig {
            initial_temperature: 10000.0,
            cooling_rate: 1e-6,
            min_temperature: 0.001,
            convergence_epsilon: 1e-7,
        }
    }
}

impl AnnealingConfig {
    /// Number of iterations until the schedule reaches `min_temperature`, ignoring early
    /// convergence.
    pub fn expected_iterations(&self) -> u64 {
        if self.initial_temperature <= self.min_temperature
            || self.cooling_rate <= 0.0
            || self.cooling_rate >= 1.0
        {
            return 0;
        }
        let steps = (self.min_temperature / self.initial_temperature).ln()
            / (1.0 - self.cooling_rate).ln();
        steps.ceil() as u64
    }
}

struct SearchState {
    tour: Vec<Node>,
    cost: Cost,
    temperature: f64,
}

/// Simulated annealing over position swaps, seeded by the nearest neighbor tour.
///
/// The first node stays in place. The random generator is owned by the strategy so runs can
/// be reproduced with a seeded generator.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<R> {
    config: AnnealingConfig,
    rng: R,
}

impl<R> SimulatedAnnealing<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self::with_config(AnnealingConfig::default(), rng)
    }

    pub fn with_config(config: AnnealingConfig, rng: R) -> Self {
        SimulatedAnnealing { config, rng }
    }

    /// Anneals from the nearest neighbor tour over `nodes`. If the walk ends above the cost
    /// of that starting tour, the starting tour is returned instead.
    pub fn run<D>(&mut self, dist: &D, nodes: Vec<Node>, progress: &mut dyn Progress) -> Tour
    where
        D: Distances,
    {
        let seed = nearest_neighbor_tour(dist, nodes);
        let n = seed.len();
        if n < 3 {
            log::info!("Nothing to anneal for {} points.", n);
            return seed;
        }

        log::info!("Starting simulated annealing. Initial tour cost: {}", seed.cost());
        let mut state = SearchState {
            tour: seed.nodes().to_vec(),
            cost: seed.cost(),
            temperature: self.config.initial_temperature,
        };
        let mut iteration = 0;

        while state.temperature > self.config.min_temperature {
            progress.report(ProgressEvent::Temperature {
                iteration,
                temperature: state.temperature,
            });

            let (i, j) = self.pick_positions(n);
            state.tour.swap(i, j);
            let candidate_cost = dist.path_cost(&state.tour);

            let change = state.cost.abs_diff(candidate_cost);
            if change != 0.0 && change < self.config.convergence_epsilon {
                state.tour.swap(i, j);
                log::info!("Converged after {} iterations.", iteration);
                break;
            }

            let accept = candidate_cost < state.cost
                || ((state.cost.as_float() - candidate_cost.as_float()) / state.temperature).exp()
                    > self.rng.gen::<f64>();
            if accept {
                state.cost = candidate_cost;
            } else {
                state.tour.swap(i, j);
            }

            progress.report(ProgressEvent::CurrentCost {
                iteration,
                cost: state.cost,
            });

            state.temperature *= 1.0 - self.config.cooling_rate;
            iteration += 1;
        }

        log::info!(
            "Simulated annealing results after {} iterations: {} -> {}",
            iteration,
            seed.cost(),
            state.cost
        );

        if state.cost > seed.cost() {
            log::info!("Annealing ended above its starting tour, keeping the starting tour.");
            seed
        } else {
            Tour::new(state.tour, state.cost)
        }
    }

    /// Two distinct positions `i < j`, both different from the anchor position 0.
    fn pick_positions(&mut self, n: usize) -> (usize, usize) {
        let picked = index::sample(&mut self.rng, n - 1, 2);
        let (a, b) = (picked.index(0) + 1, picked.index(1) + 1);
        (a.min(b), a.max(b))
    }
}

impl<R> Strategy for SimulatedAnnealing<R>
where
    R: Rng,
{
    fn solve(&mut self, points: &PointSet, progress: &mut dyn Progress) -> Result<Tour> {
        let dist = DistanceMatrix::compute_all_pairs(points);
        Ok(self.run(&dist, points.nodes().collect(), progress))
    }
}
