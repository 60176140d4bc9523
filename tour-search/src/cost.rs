use std::{
    fmt,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::Serialize;

/// The length of a path between points. Always non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize)]
pub struct Cost(f64);

impl Cost {
    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn zero() -> Self {
        Cost(0.0)
    }

    pub fn as_float(&self) -> f64 {
        self.0
    }

    /// Absolute difference between two costs.
    pub fn abs_diff(&self, other: Cost) -> f64 {
        (self.0 - other.0).abs()
    }

    pub fn approx_eq(&self, other: Cost, tolerance: f64) -> bool {
        self.abs_diff(other) <= tolerance
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = Cost(self.0 + rhs.0)
    }
}

impl Sum<Cost> for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I: Iterator<Item = &'a Cost>>(iter: I) -> Self {
        iter.fold(Cost::zero(), |a, b| a + *b)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost::new(cost)
    }
}

#[cfg(test)]
mod test_cost {
    use super::*;

    #[test]
    fn test_cost_sum() {
        let costs: Vec<Cost> = vec![3.0.into(), 4.0.into(), 5.5.into()];
        assert_eq!(costs.iter().sum::<Cost>(), Cost::new(12.5));
        assert_eq!(costs.into_iter().sum::<Cost>(), Cost::new(12.5));
        assert_eq!(Vec::<Cost>::new().into_iter().sum::<Cost>(), Cost::zero());
    }

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::new(7.0) < Cost::new(8.0));
        assert!(Cost::new(1.0).approx_eq(Cost::new(1.0 + 1e-12), 1e-9));
        assert!(!Cost::new(1.0).approx_eq(Cost::new(1.1), 1e-9));
    }
}
