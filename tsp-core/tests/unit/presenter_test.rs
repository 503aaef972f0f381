use super::*;
use crate::helpers::client::create_test_response;

#[test]
fn can_render_successful_response() {
    let mut presenter = ResultPresenter::default();
    presenter.open(create_test_response(42.5, &["A", "B", "A"]));

    let view = presenter.view().unwrap();

    assert_eq!(view.minimum_cost, "42.5000");
    assert_eq!(view.optimal_tour, "A → B → A");
    assert_eq!(view.execution_time, "1.23 seconds");
    assert_eq!(view.status, "success");
    assert_eq!(view.execution_type, "parallel");
    assert_eq!(view.method_type, "brute");
}

#[test]
fn can_copy_cost_text() {
    let mut presenter = ResultPresenter::default();
    assert_eq!(presenter.copy_cost(), None);

    presenter.open(create_test_response(1234.56789, &["A", "A"]));

    assert_eq!(presenter.copy_cost(), Some("1234.5679".to_string()));
}

#[test]
fn can_open_and_close_dialog() {
    let mut presenter = ResultPresenter::default();
    assert!(!presenter.is_open());
    assert!(presenter.view().is_none());

    presenter.open(create_test_response(1., &["A", "A"]));
    assert!(presenter.is_open());
    assert_eq!(presenter.response().map(|response| response.result.minimum_cost), Some(1.));

    presenter.open(create_test_response(2., &["B", "B"]));
    assert_eq!(presenter.copy_cost(), Some("2.0000".to_string()));

    presenter.close();
    assert!(!presenter.is_open());
    assert!(presenter.response().is_none());
}

#[test]
fn can_display_dialog_as_text() {
    let mut presenter = ResultPresenter::default();
    presenter.open(create_test_response(42.5, &["A", "B", "A"]));

    let text = presenter.view().unwrap().to_string();

    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Optimization Results");
    assert_eq!(lines[5], "  Minimum Cost    42.5000");
    assert_eq!(lines[6], "  Optimal Tour    A → B → A");
}
