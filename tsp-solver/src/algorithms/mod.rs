//! Tour construction algorithms.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/tour_test.rs"]
mod tour_test;

use crate::matrix::DistanceMatrix;
use std::cmp::Ordering;

mod brute;
pub use self::brute::*;

mod nearest;
pub use self::nearest::*;

/// A closed tour over node indices: the first and the last index are the start node.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Visited node indices in order.
    pub nodes: Vec<usize>,
    /// Total travel cost.
    pub cost: f64,
}

impl Tour {
    /// Creates a tour from visited nodes calculating its cost.
    pub fn new(nodes: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let cost = tour_cost(nodes.as_slice(), matrix);
        Self { nodes, cost }
    }

    /// Creates a tour which starts at the given node, visits the given nodes in order and returns back.
    pub fn closed(start: usize, visits: impl IntoIterator<Item = usize>, matrix: &DistanceMatrix) -> Self {
        let nodes = std::iter::once(start).chain(visits).chain(std::iter::once(start)).collect::<Vec<_>>();
        Self::new(nodes, matrix)
    }
}

/// Returns total cost of travelling between consecutive nodes.
pub fn tour_cost(nodes: &[usize], matrix: &DistanceMatrix) -> f64 {
    nodes.windows(2).map(|leg| matrix.distance(leg[0], leg[1])).sum()
}

/// Selects a tour with lower cost, on equal cost the left one is kept.
pub(crate) fn select_best(left: Option<Tour>, right: Option<Tour>) -> Option<Tour> {
    match (left, right) {
        (Some(left), Some(right)) => match right.cost.total_cmp(&left.cost) {
            Ordering::Less => Some(right),
            _ => Some(left),
        },
        (left, right) => left.or(right),
    }
}
