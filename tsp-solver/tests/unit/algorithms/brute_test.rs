use super::*;
use crate::algorithms::tour_cost;
use crate::helpers::*;

#[test]
fn can_enumerate_permutations_lexicographically() {
    let mut items = vec![0, 1, 2];
    let mut permutations = vec![items.clone()];

    while next_permutation(items.as_mut_slice()) {
        permutations.push(items.clone());
    }

    assert_eq!(permutations, vec![vec![0, 1, 2], vec![0, 2, 1], vec![1, 0, 2], vec![1, 2, 0], vec![2, 0, 1], vec![
        2, 1, 0
    ]]);
}

#[test]
fn can_handle_trivial_permutations() {
    assert!(!next_permutation(&mut []));
    assert!(!next_permutation(&mut [1]));
}

parameterized_test! {can_solve_small_tours, (coordinates, start, expected_nodes), {
    let matrix = create_matrix(coordinates);

    let serial = solve_brute_serial(&matrix, start);
    let parallel = solve_brute_parallel(&matrix, start, &create_test_pool());

    assert_eq!(serial.nodes, expected_nodes);
    assert_eq!(parallel, serial);
}}

can_solve_small_tours! {
    case01_single: (&[(1., 1.)], 0, vec![0, 0]),
    case02_two: (&[(1., 1.), (2., 2.)], 1, vec![1, 0, 1]),
    case03_square: (&[(0., 0.), (1., 1.), (1., 0.), (0., 1.)], 0, vec![0, 2, 1, 3, 0]),
    case04_square_from_other: (&[(0., 0.), (1., 1.), (1., 0.), (0., 1.)], 1, vec![1, 2, 0, 3, 1]),
}

#[test]
fn can_find_optimal_tour_on_circle() {
    let coordinates = create_circle_coordinates(8);
    let matrix = create_matrix(coordinates.as_slice());
    let expected_cost = 8. * 2. * 10. * (std::f64::consts::PI / 8.).sin();

    let serial = solve_brute_serial(&matrix, 3);
    let parallel = solve_brute_parallel(&matrix, 3, &create_test_pool());

    assert!((serial.cost - expected_cost).abs() < 1e-9);
    assert_eq!(serial.cost, tour_cost(serial.nodes.as_slice(), &matrix));
    assert_eq!(serial.nodes.first(), Some(&3));
    assert_eq!(serial.nodes.last(), Some(&3));
    assert_eq!(parallel, serial);
}
