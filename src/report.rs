use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

use tour_search::graph::{PointSet, Tour};

/// Human readable summary of a solved tour.
pub struct Report<'a> {
    tour: &'a Tour,
    points: &'a PointSet,
    elapsed: Duration,
}

impl<'a> Report<'a> {
    pub fn new(tour: &'a Tour, points: &'a PointSet, elapsed: Duration) -> Self {
        Self {
            tour,
            points,
            elapsed,
        }
    }

    pub fn route(&self) -> String {
        self.tour
            .points(self.points)
            .iter()
            .map(|p| p.name())
            .collect::<Vec<&str>>()
            .join(" -> ")
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Path: {}", self.route())?;
        writeln!(f)?;
        writeln!(f, "Cost: {}", self.tour.cost())?;
        writeln!(f)?;
        writeln!(f, "Time: {}", self.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod test_report {
    use super::*;
    use tour_search::{algs::nearest_neighbor, graph::Point};

    #[test]
    fn test_report() {
        let points: PointSet = vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 3.0),
            Point::new("C", 4.0, 0.0),
        ]
        .into_iter()
        .collect();
        let tour = nearest_neighbor(&points);
        let report = Report::new(&tour, &points, Duration::from_millis(1500));

        assert_eq!(report.route(), "A -> B -> C");
        assert_eq!(
            report.to_string(),
            "\nPath: A -> B -> C\n\nCost: 8\n\nTime: 1.5\n"
        );
    }

    #[test]
    fn test_empty_route() {
        let points = PointSet::default();
        let tour = Tour::empty();
        assert_eq!(Report::new(&tour, &points, Duration::default()).route(), "");
    }
}
