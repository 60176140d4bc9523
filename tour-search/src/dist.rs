use ndarray::Array2;

use crate::{
    graph::{euclidean, Distances, Node, PointSet},
    Cost,
};

impl Distances for DistanceMatrix {
    fn distance(&self, n1: Node, n2: Node) -> Cost {
        self.get(n1, n2)
    }
}

/// Dense cache of all pairwise Euclidean distances of a point set.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    matrix: Array2<Cost>,
}

impl DistanceMatrix {
    pub fn compute_all_pairs(points: &PointSet) -> Self {
        let n = points.len();
        log::debug!("Computing all pair distances for {} points.", n);

        let mut d = Array2::from_elem((n, n), Cost::zero());
        for (i, n1) in points.nodes().enumerate() {
            for n2 in points.nodes().skip(i + 1) {
                let cost = euclidean(&points[n1], &points[n2]);
                d[[n1.id(), n2.id()]] = cost;
                d[[n2.id(), n1.id()]] = cost;
            }
        }

        DistanceMatrix { matrix: d }
    }

    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get(&self, n1: Node, n2: Node) -> Cost {
        self.matrix[[n1.id(), n2.id()]]
    }
}
