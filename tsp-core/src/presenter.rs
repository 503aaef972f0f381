//! Renders the solver response in a results dialog.

#[cfg(test)]
#[path = "../tests/unit/presenter_test.rs"]
mod presenter_test;

use crate::format::response::TspResponse;
use std::fmt;

/// A separator between tour labels.
pub const TOUR_SEPARATOR: &str = " → ";

/// Keeps the last response while the results dialog is open.
#[derive(Clone, Debug, Default)]
pub struct ResultPresenter {
    response: Option<TspResponse>,
}

impl ResultPresenter {
    /// Opens dialog with the response, replacing any previous one.
    pub fn open(&mut self, response: TspResponse) {
        self.response = Some(response);
    }

    /// Closes dialog.
    pub fn close(&mut self) {
        self.response = None;
    }

    /// Returns true if dialog is open.
    pub fn is_open(&self) -> bool {
        self.response.is_some()
    }

    /// Returns the response shown in the dialog.
    pub fn response(&self) -> Option<&TspResponse> {
        self.response.as_ref()
    }

    /// Returns rendered dialog content if dialog is open.
    pub fn view(&self) -> Option<ResultView> {
        self.response.as_ref().map(ResultView::new)
    }

    /// Returns text copied by the copy affordance next to the minimum cost.
    pub fn copy_cost(&self) -> Option<String> {
        self.response.as_ref().map(|response| format_cost(response.result.minimum_cost))
    }
}

/// Rendered dialog content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    /// Execution type.
    pub execution_type: String,
    /// Method type.
    pub method_type: String,
    /// Status.
    pub status: String,
    /// Execution time with units.
    pub execution_time: String,
    /// Minimum cost with four decimals.
    pub minimum_cost: String,
    /// Tour labels joined by arrows.
    pub optimal_tour: String,
}

impl ResultView {
    fn new(response: &TspResponse) -> Self {
        Self {
            execution_type: response.execution_type.to_string(),
            method_type: response.method_type.to_string(),
            status: response.status.clone(),
            execution_time: format!("{} seconds", response.result.execution_time_seconds),
            minimum_cost: format_cost(response.result.minimum_cost),
            optimal_tour: response.result.optimal_tour.join(TOUR_SEPARATOR),
        }
    }

    /// Returns dialog rows as name and value pairs.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Execution Type", self.execution_type.as_str()),
            ("Method Type", self.method_type.as_str()),
            ("Status", self.status.as_str()),
            ("Execution Time", self.execution_time.as_str()),
            ("Minimum Cost", self.minimum_cost.as_str()),
            ("Optimal Tour", self.optimal_tour.as_str()),
        ]
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Optimization Results")?;
        self.rows().iter().try_for_each(|(name, value)| writeln!(f, "  {name:<16}{value}"))
    }
}

fn format_cost(cost: f64) -> String {
    format!("{cost:.4}")
}
