use std::fmt::{self, Display, Formatter};

use crate::Cost;

/// Intermediate state reported while a strategy runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// Annealing temperature at the start of an iteration.
    Temperature { iteration: usize, temperature: f64 },
    /// Annealing cost after the accept/reject decision of an iteration.
    CurrentCost { iteration: usize, cost: Cost },
    /// A point has been inserted into the path.
    Inserted { placed: usize, total: usize },
}

impl ProgressEvent {
    /// Share of placed points in percent, rounded to two decimals.
    pub fn percent(&self) -> Option<f64> {
        match *self {
            ProgressEvent::Inserted { placed, total } if total > 0 => {
                Some((placed as f64 / total as f64 * 10000.0).round() / 100.0)
            }
            _ => None,
        }
    }
}

impl Display for ProgressEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Temperature { temperature, .. } => write!(f, "TEMP: {}", temperature),
            ProgressEvent::CurrentCost { cost, .. } => write!(f, "COST: {}", cost),
            ProgressEvent::Inserted { .. } => write!(f, "{}%", self.percent().unwrap_or(0.0)),
        }
    }
}

/// A sink for progress events. Reporting never influences the result of a strategy.
pub trait Progress {
    fn report(&mut self, event: ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _event: ProgressEvent) {}
}

impl Progress for Vec<ProgressEvent> {
    fn report(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod test_progress {
    use super::*;

    #[test]
    fn test_percent() {
        let event = ProgressEvent::Inserted {
            placed: 2,
            total: 3,
        };
        assert_eq!(event.percent(), Some(66.67));
        assert_eq!(event.to_string(), "66.67%");

        let done = ProgressEvent::Inserted {
            placed: 4,
            total: 4,
        };
        assert_eq!(done.percent(), Some(100.0));
        assert_eq!(
            ProgressEvent::Temperature {
                iteration: 0,
                temperature: 10000.0
            }
            .percent(),
            None
        );
    }

    #[test]
    fn test_collect() {
        let mut events: Vec<ProgressEvent> = vec![];
        {
            let sink: &mut dyn Progress = &mut events;
            sink.report(ProgressEvent::CurrentCost {
                iteration: 1,
                cost: Cost::new(2.5),
            });
        }
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "COST: 2.5");
    }
}
