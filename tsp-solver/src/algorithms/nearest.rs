#[cfg(test)]
#[path = "../../tests/unit/algorithms/nearest_test.rs"]
mod nearest_test;

use super::Tour;
use crate::matrix::DistanceMatrix;
use crate::utils::{ThreadPool, map_reduce};
use std::cmp::Ordering;

/// Builds a tour by always moving to the nearest unvisited node, single threaded.
pub fn solve_nearest_serial(matrix: &DistanceMatrix, start: usize) -> Tour {
    build_nearest_tour(matrix, start, |current, candidates| {
        candidates.iter().fold(None, |best, &node| select_nearest(best, Some((node, matrix.distance(current, node)))))
    })
}

/// Builds a tour by always moving to the nearest unvisited node. Candidate scans run on the
/// thread pool. Returns the same tour as the serial heuristic.
pub(crate) fn solve_nearest_parallel(matrix: &DistanceMatrix, start: usize, pool: &ThreadPool) -> Tour {
    build_nearest_tour(matrix, start, |current, candidates| {
        pool.execute(|| {
            map_reduce(candidates, |&node| Some((node, matrix.distance(current, node))), || None, select_nearest)
        })
    })
}

fn build_nearest_tour<F>(matrix: &DistanceMatrix, start: usize, find_nearest: F) -> Tour
where
    F: Fn(usize, &[usize]) -> Option<(usize, f64)>,
{
    let mut unvisited = (0..matrix.size()).filter(|&node| node != start).collect::<Vec<_>>();
    let mut visits = Vec::with_capacity(unvisited.len());
    let mut current = start;

    while let Some((nearest, _)) = find_nearest(current, unvisited.as_slice()) {
        unvisited.retain(|&node| node != nearest);
        visits.push(nearest);
        current = nearest;
    }

    Tour::closed(start, visits, matrix)
}

/// Selects a candidate with lower distance, on equal distance the one with lower index is kept.
fn select_nearest(left: Option<(usize, f64)>, right: Option<(usize, f64)>) -> Option<(usize, f64)> {
    match (left, right) {
        (Some(left), Some(right)) => match right.1.total_cmp(&left.1).then(right.0.cmp(&left.0)) {
            Ordering::Less => Some(right),
            _ => Some(left),
        },
        (left, right) => left.or(right),
    }
}
