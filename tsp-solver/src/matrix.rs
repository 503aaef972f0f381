//! A distance matrix between request nodes.

#[cfg(test)]
#[path = "../tests/unit/matrix_test.rs"]
mod matrix_test;

use tsp_core::models::Coordinates;

/// A square matrix of euclidean distances between node coordinates, stored row by row.
///
/// Coordinates are treated as plain `(lng, lat)` points on a plane, as the solving service does.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a new matrix for the given locations.
    pub fn new(locations: &[Coordinates]) -> Self {
        let size = locations.len();
        let distances = locations
            .iter()
            .flat_map(|from| locations.iter().map(move |to| euclidean_distance(from, to)))
            .collect();

        Self { size, distances }
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.size + to]
    }
}

fn euclidean_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let (x1, y1) = from.as_tuple();
    let (x2, y2) = to.as_tuple();

    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}
