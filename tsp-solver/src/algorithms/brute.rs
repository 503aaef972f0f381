#[cfg(test)]
#[path = "../../tests/unit/algorithms/brute_test.rs"]
mod brute_test;

use super::{Tour, select_best};
use crate::matrix::DistanceMatrix;
use crate::utils::{ThreadPool, map_reduce};

/// Finds an optimal tour by checking every order of visits, single threaded.
///
/// Orders are enumerated lexicographically, so among tours with equal cost the one with lower
/// node indices visited first wins.
pub fn solve_brute_serial(matrix: &DistanceMatrix, start: usize) -> Tour {
    let others = get_other_nodes(matrix, start);

    best_tour_with_prefix(matrix, start, &[], others)
}

/// Finds an optimal tour by checking every order of visits. The search is split by the first
/// visited node and branches run on the thread pool. Returns the same tour as the serial search.
pub(crate) fn solve_brute_parallel(matrix: &DistanceMatrix, start: usize, pool: &ThreadPool) -> Tour {
    let others = get_other_nodes(matrix, start);

    if others.len() < 2 {
        return best_tour_with_prefix(matrix, start, &[], others);
    }

    let best = pool.execute(|| {
        map_reduce(
            others.as_slice(),
            |&first| {
                let rest = others.iter().copied().filter(|&node| node != first).collect();
                Some(best_tour_with_prefix(matrix, start, &[first], rest))
            },
            || None,
            select_best,
        )
    });

    best.unwrap_or_else(|| Tour::closed(start, others, matrix))
}

fn get_other_nodes(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    (0..matrix.size()).filter(|&node| node != start).collect()
}

/// Returns the best tour which starts with the given prefix, `rest` must be sorted.
fn best_tour_with_prefix(matrix: &DistanceMatrix, start: usize, prefix: &[usize], mut rest: Vec<usize>) -> Tour {
    let mut best = Tour::closed(start, prefix.iter().chain(rest.iter()).copied(), matrix);

    while next_permutation(rest.as_mut_slice()) {
        let candidate = Tour::closed(start, prefix.iter().chain(rest.iter()).copied(), matrix);
        if candidate.cost < best.cost {
            best = candidate;
        }
    }

    best
}

/// Rearranges items into the lexicographically next permutation. Returns false when items are
/// already in the last permutation.
pub(crate) fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();

    true
}
