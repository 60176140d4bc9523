use indicatif::{ProgressBar, ProgressStyle};
use tour_search::{
    algs::AnnealingConfig,
    progress::{Progress, ProgressEvent},
    Algorithm,
};

/// Annealing iterations between two bar updates.
const ANNEALING_REFRESH: usize = 10_000;

/// Forwards progress events to a terminal progress bar and the log.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn for_algorithm(
        algorithm: Algorithm,
        num_points: usize,
        config: &AnnealingConfig,
        hidden: bool,
    ) -> Self {
        let len = match algorithm {
            Algorithm::Annealing => config.expected_iterations(),
            Algorithm::NearestInsertion => num_points as u64,
            _ => 0,
        };

        let bar = if hidden || len == 0 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(len);
            bar.set_style(ProgressStyle::default_bar().template(
                "{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] ({pos}/{len})",
            ));
            bar.set_message(algorithm.identifier());
            bar
        };

        BarProgress { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for BarProgress {
    fn report(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Temperature { iteration, .. } => {
                log::trace!("{}", event);
                if iteration % ANNEALING_REFRESH == 0 {
                    self.bar.set_position(iteration as u64);
                }
            }
            ProgressEvent::CurrentCost { .. } => log::trace!("{}", event),
            ProgressEvent::Inserted { placed, .. } => {
                log::debug!("{}", event);
                self.bar.set_position(placed as u64);
            }
        }
    }
}
