use super::*;
use crate::helpers::*;

fn create_service() -> SolverService {
    SolverService::new(ServiceConfig { threads: 4, max_brute_nodes: DEFAULT_MAX_BRUTE_NODES }).unwrap()
}

parameterized_test! {can_solve_request_with_any_mode, (execution_type, method_type), {
    let request = create_request(&[(0., 0.), (0., 3.), (4., 0.)], execution_type, method_type, "B");

    let response = create_service().solve(&request).unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(response.execution_type, execution_type);
    assert_eq!(response.method_type, method_type);
    assert_eq!(response.result.minimum_cost, 12.);
    assert_eq!(response.result.optimal_tour.first().map(|label| label.as_str()), Some("B"));
    assert_eq!(response.result.optimal_tour.last().map(|label| label.as_str()), Some("B"));
    assert_eq!(response.result.optimal_tour.len(), 4);
    assert!(response.result.execution_time_seconds >= 0.);
}}

can_solve_request_with_any_mode! {
    case01_serial_brute: (ExecutionType::Serial, MethodType::Brute),
    case02_serial_nearest: (ExecutionType::Serial, MethodType::Nearest),
    case03_parallel_brute: (ExecutionType::Parallel, MethodType::Brute),
    case04_parallel_nearest: (ExecutionType::Parallel, MethodType::Nearest),
}

#[test]
fn can_get_same_result_for_serial_and_parallel() {
    let coordinates = create_circle_coordinates(9);
    let service = create_service();

    for method_type in [MethodType::Brute, MethodType::Nearest] {
        let serial = service.solve(&create_request(&coordinates, ExecutionType::Serial, method_type, "C")).unwrap();
        let parallel =
            service.solve(&create_request(&coordinates, ExecutionType::Parallel, method_type, "C")).unwrap();

        assert_eq!(serial.result.optimal_tour, parallel.result.optimal_tour);
        assert_eq!(serial.result.minimum_cost, parallel.result.minimum_cost);
    }
}

#[test]
fn can_find_not_worse_tour_with_brute_than_with_nearest() {
    let coordinates = [(0., 0.), (5., 1.), (1., 1.), (6., 0.), (2., 5.), (3., 0.)];
    let service = create_service();

    let brute = service.solve(&create_request(&coordinates, ExecutionType::Serial, MethodType::Brute, "A")).unwrap();
    let nearest =
        service.solve(&create_request(&coordinates, ExecutionType::Serial, MethodType::Nearest, "A")).unwrap();

    assert!(brute.result.minimum_cost <= nearest.result.minimum_cost);
}

#[test]
fn can_reject_unknown_start_node() {
    let request = create_request(&[(0., 0.), (1., 1.)], ExecutionType::Serial, MethodType::Brute, "C");

    let err = create_service().solve(&request).unwrap_err();

    assert_eq!(err, ServiceError::InvalidStartNode { labels: vec!["A".to_string(), "B".to_string()] });
    assert_eq!(err.to_string(), "Invalid 'startNode'. Must be one of: [A, B]");
    assert_eq!(err.status(), 400);
}

#[test]
fn can_reject_empty_nodes() {
    let request = create_request(&[], ExecutionType::Serial, MethodType::Nearest, "A");

    assert_eq!(create_service().solve(&request), Err(ServiceError::NoNodes));
}

#[test]
fn can_limit_brute_force_size() {
    let service = SolverService::new(ServiceConfig { threads: 1, max_brute_nodes: 3 }).unwrap();
    let coordinates = [(0., 0.), (1., 1.), (2., 2.), (3., 3.)];

    let brute = service.solve(&create_request(&coordinates, ExecutionType::Serial, MethodType::Brute, "A"));
    let nearest = service.solve(&create_request(&coordinates, ExecutionType::Serial, MethodType::Nearest, "A"));

    assert_eq!(brute, Err(ServiceError::TooManyNodes { size: 4, limit: 3 }));
    assert!(nearest.is_ok());
}

#[test]
fn can_solve_single_node() {
    let request = create_request(&[(5., 5.)], ExecutionType::Parallel, MethodType::Brute, "A");

    let response = create_service().solve(&request).unwrap();

    assert_eq!(response.result.optimal_tour, vec!["A", "A"]);
    assert_eq!(response.result.minimum_cost, 0.);
}

#[test]
fn can_use_default_config() {
    let config = ServiceConfig::default();

    assert!(config.threads > 0);
    assert_eq!(config.max_brute_nodes, 11);
}
