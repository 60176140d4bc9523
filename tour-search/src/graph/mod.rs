mod node;
mod point;
mod tour;

pub use node::Node;
pub use point::{Point, PointSet};
pub use tour::Tour;

use crate::Cost;

/// Pairwise distances between the nodes of a point set.
pub trait Distances {
    fn distance(&self, n1: Node, n2: Node) -> Cost;

    /// Cost of visiting `nodes` in order as an open path.
    fn path_cost(&self, nodes: &[Node]) -> Cost {
        let mut cost = Cost::zero();
        for e in nodes.windows(2) {
            cost += self.distance(e[0], e[1]);
        }
        cost
    }
}

/// Euclidean distance between two points.
pub fn euclidean(p1: &Point, p2: &Point) -> Cost {
    Cost::new(((p1.x() - p2.x()).powi(2) + (p1.y() - p2.y()).powi(2)).sqrt())
}

impl Distances for PointSet {
    fn distance(&self, n1: Node, n2: Node) -> Cost {
        euclidean(&self[n1], &self[n2])
    }
}

#[cfg(test)]
mod test_graph {
    use super::*;

    fn triangle() -> PointSet {
        vec![
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 3.0),
            Point::new("C", 4.0, 0.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_euclidean() {
        let points = triangle();
        assert_eq!(points.distance(0.into(), 1.into()), Cost::new(3.0));
        assert_eq!(points.distance(1.into(), 2.into()), Cost::new(5.0));
        assert_eq!(
            points.distance(2.into(), 1.into()),
            points.distance(1.into(), 2.into())
        );
        assert_eq!(points.distance(2.into(), 2.into()), Cost::zero());
    }

    #[test]
    fn test_path_cost() {
        let points = triangle();
        let nodes: Vec<Node> = vec![2, 0, 1].into_iter().map(Node::new).collect();
        assert_eq!(points.path_cost(&nodes), Cost::new(7.0));
        assert_eq!(points.path_cost(&nodes), points.path_cost(&nodes));
        assert_eq!(points.path_cost(&nodes[..1]), Cost::zero());
        assert_eq!(points.path_cost(&[]), Cost::zero());
    }
}
