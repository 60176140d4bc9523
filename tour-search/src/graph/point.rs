use std::{iter::FromIterator, ops::Index};

use serde::{Deserialize, Serialize};

use super::Node;

/// A named location in the plane. Names are labels only and need not be unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    name: String,
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Point {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.name, self.x, self.y)
    }
}

/// The ordered input of every strategy. The first point is the anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        PointSet(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, node: Node) -> Option<&Point> {
        self.0.get(node.id())
    }

    /// All nodes in loaded order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + Clone {
        (0..self.0.len()).map(Node::new)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }
}

impl Index<Node> for PointSet {
    type Output = Point;

    fn index(&self, node: Node) -> &Self::Output {
        &self.0[node.id()]
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        PointSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
