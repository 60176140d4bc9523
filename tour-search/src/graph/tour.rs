use crate::Cost;

use super::{Distances, Node, Point, PointSet};

/// An open path through a point set. Every node of the set appears exactly once and
/// the path does not return to its first node.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    nodes: Vec<Node>,
    cost: Cost,
}

impl IntoIterator for Tour {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Tour {
    pub fn empty() -> Self {
        Self {
            nodes: vec![],
            cost: Cost::zero(),
        }
    }

    pub fn new(nodes: Vec<Node>, cost: Cost) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<Node> = nodes.clone();
                ids.sort();
                ids.dedup();
                ids.len() == nodes.len()
            },
            "a tour visits every node once"
        );
        Self { nodes, cost }
    }

    pub fn with_cost_from<D>(nodes: Vec<Node>, dist: &D) -> Self
    where
        D: Distances,
    {
        let cost = dist.path_cost(&nodes);
        Self::new(nodes, cost)
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn first(&self) -> Option<Node> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<Node> {
        self.nodes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Node> {
        self.nodes.get(idx).copied()
    }

    /// Resolves the tour to the points it visits, in visiting order.
    pub fn points<'a>(&self, points: &'a PointSet) -> Vec<&'a Point> {
        self.nodes.iter().map(|&n| &points[n]).collect()
    }

    /// Returns `true` if the tour visits every point of `points` exactly once.
    pub fn is_permutation_of(&self, points: &PointSet) -> bool {
        let mut ids: Vec<usize> = self.nodes.iter().map(|n| n.id()).collect();
        ids.sort_unstable();
        ids.len() == points.len() && ids.into_iter().eq(0..points.len())
    }
}
