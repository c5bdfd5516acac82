//! Derived balance statistics
//!
//! Four figures summarizing a [`SeriesResponse`]: the combined balance on the
//! first and last day, the change between them, and the growth factor.

use serde::{Deserialize, Serialize};

use super::series::SeriesResponse;

/// Summary of a balance history
///
/// Values keep full precision; rounding happens when they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Sum of every budget's balance on the first day
    pub start_balance: f64,
    /// Sum of every budget's balance on the last day
    pub end_balance: f64,
    /// `end_balance - start_balance`
    pub difference: f64,
    /// `end_balance / start_balance`, see [`Statistics::growth_is_degenerate`]
    pub growth_factor: f64,
}

impl Statistics {
    /// True when the start balance was zero
    ///
    /// The growth factor is then computed against a denominator of 1 and
    /// equals the end balance. It is not a meaningful ratio.
    pub fn growth_is_degenerate(&self) -> bool {
        self.start_balance == 0.0
    }
}

/// Compute the statistics of a response
///
/// Expects a response that passed [`SeriesResponse::validate`]. With no
/// budgets every figure is zero.
pub fn compute_stats(response: &SeriesResponse) -> Statistics {
    let start_balance = start_balance(response);
    let end_balance = end_balance(response);

    // zero start balance: divide by 1 instead
    let denominator = if start_balance == 0.0 { 1.0 } else { start_balance };

    Statistics {
        start_balance,
        end_balance,
        difference: end_balance - start_balance,
        growth_factor: end_balance / denominator,
    }
}

/// Combined balance on the first day
fn start_balance(response: &SeriesResponse) -> f64 {
    response
        .budgets
        .iter()
        .fold(0.0, |total, b| total + b.data[0])
}

/// Combined balance on the last day
fn end_balance(response: &SeriesResponse) -> f64 {
    let last = response.days.len().saturating_sub(1);
    response
        .budgets
        .iter()
        .fold(0.0, |total, b| total + b.data[last])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::BudgetSeries;

    fn response(budgets: Vec<BudgetSeries>) -> SeriesResponse {
        SeriesResponse::new(vec!["01/01".into(), "01/08".into()], budgets)
    }

    #[test]
    fn test_sums_first_and_last_day() {
        let stats = compute_stats(&response(vec![
            BudgetSeries::new("Rent", vec![100.0, 150.0]),
            BudgetSeries::new("Food", vec![50.0, 40.0]),
        ]));

        assert_eq!(stats.start_balance, 150.0);
        assert_eq!(stats.end_balance, 190.0);
        assert_eq!(stats.difference, 40.0);
        assert_eq!(stats.growth_factor, 190.0 / 150.0);
        assert!(!stats.growth_is_degenerate());
    }

    #[test]
    fn test_zero_start_balance_divides_by_one() {
        let stats = compute_stats(&response(vec![
            BudgetSeries::new("X", vec![0.0, 0.0]),
            BudgetSeries::new("Y", vec![0.0, 30.0]),
        ]));

        assert_eq!(stats.start_balance, 0.0);
        assert_eq!(stats.growth_factor, 30.0);
        assert_eq!(stats.growth_factor, stats.end_balance);
        assert!(stats.growth_factor.is_finite());
        assert!(stats.growth_is_degenerate());
    }

    #[test]
    fn test_offsetting_start_balances_use_guard() {
        let stats = compute_stats(&response(vec![
            BudgetSeries::new("Credit", vec![-25.0, -10.0]),
            BudgetSeries::new("Checking", vec![25.0, 60.0]),
        ]));

        assert_eq!(stats.start_balance, 0.0);
        assert_eq!(stats.growth_factor, 50.0);
    }

    #[test]
    fn test_empty_budgets_are_all_zero() {
        let stats = compute_stats(&response(Vec::new()));

        assert_eq!(stats.start_balance, 0.0);
        assert_eq!(stats.end_balance, 0.0);
        assert_eq!(stats.difference, 0.0);
        assert_eq!(stats.growth_factor, 0.0);
    }

    #[test]
    fn test_empty_budgets_and_days_are_all_zero() {
        let stats = compute_stats(&SeriesResponse::new(Vec::new(), Vec::new()));
        assert_eq!(stats.growth_factor, 0.0);
    }

    #[test]
    fn test_single_day_has_no_change() {
        let stats = compute_stats(&SeriesResponse::new(
            vec!["01/01".into()],
            vec![BudgetSeries::new("Rent", vec![80.0])],
        ));

        assert_eq!(stats.difference, 0.0);
        assert_eq!(stats.growth_factor, 1.0);
    }

    #[test]
    fn test_difference_is_exact() {
        let samples = [
            vec![0.1, 0.7],
            vec![1e9, -3.25],
            vec![12.345, 67.891],
            vec![-0.3, 0.2],
        ];
        for data in samples {
            let stats = compute_stats(&response(vec![
                BudgetSeries::new("A", data.clone()),
                BudgetSeries::new("B", data.iter().map(|v| v * 3.0).collect()),
            ]));
            assert_eq!(stats.difference, stats.end_balance - stats.start_balance);
        }
    }
}
