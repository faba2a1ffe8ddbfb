//! Locked vs. staked allocation across the altseason calendar
//!
//! Each month falls in exactly one phase. Outside the altseason window all
//! available tokens are locked; inside it they are staked. When a profit goal
//! is configured, the first altseason month in which the staked position is
//! worth at least the goal realizes `goal / price` tokens. Realization fires
//! at most once and the realized tokens stay out of both buckets afterwards.

use log::debug;
use serde::Serialize;

use crate::assumptions::{AltseasonCalendar, Phase};

/// Per-month inputs to the allocation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationInput {
    pub month: u32,
    /// Vested allocation plus cumulative reward tokens
    pub available: f64,
    pub price: f64,
    pub cumulative_reward_tokens: f64,
}

/// Allocation state for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationRow {
    pub month: u32,
    pub phase: Phase,
    pub locked: f64,
    pub staked: f64,
    /// Tokens realized against the profit goal so far
    pub realized: f64,
    pub goal_fulfilled: bool,
    /// max(locked, staked) + cumulative reward tokens
    pub overlay: f64,
}

/// Assign each month's available tokens to the locked or staked bucket
pub fn allocate(
    calendar: &AltseasonCalendar,
    profit_goal: Option<f64>,
    inputs: &[AllocationInput],
) -> Vec<AllocationRow> {
    inputs
        .iter()
        .scan((0.0_f64, false), |(realized, fulfilled), input| {
            let phase = calendar.phase(input.month);
            let holding = (input.available - *realized).max(0.0);

            let (locked, staked) = match phase {
                Phase::PreSeason | Phase::PostSeason => (holding, 0.0),
                Phase::Altseason => {
                    let mut staked = holding;
                    if let Some(goal) = profit_goal {
                        if !*fulfilled && input.price > 0.0 && staked * input.price >= goal {
                            let sold = goal / input.price;
                            debug!(
                                "Profit goal {:.0} reached in month {}: realizing {:.2} tokens at {:.4}",
                                goal, input.month, sold, input.price
                            );
                            *realized += sold;
                            *fulfilled = true;
                            staked -= sold;
                        }
                    }
                    (0.0, staked)
                }
            };

            Some(AllocationRow {
                month: input.month,
                phase,
                locked,
                staked,
                realized: *realized,
                goal_fulfilled: *fulfilled,
                overlay: locked.max(staked) + input.cumulative_reward_tokens,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(price: f64) -> Vec<AllocationInput> {
        (1..=24)
            .map(|m| AllocationInput {
                month: m,
                available: 100_000.0 + 1_000.0 * m as f64,
                price,
                cumulative_reward_tokens: 1_000.0 * m as f64,
            })
            .collect()
    }

    #[test]
    fn test_three_phases() {
        let cal = AltseasonCalendar { start_month: 18, duration_months: 4 };
        let rows = allocate(&cal, None, &inputs(1.0));

        let m17 = rows[16];
        assert_eq!(m17.phase, Phase::PreSeason);
        assert_eq!(m17.staked, 0.0);
        assert_eq!(m17.locked, 117_000.0);

        let m19 = rows[18];
        assert_eq!(m19.phase, Phase::Altseason);
        assert_eq!(m19.locked, 0.0);
        assert_eq!(m19.staked, 119_000.0);

        let m23 = rows[22];
        assert_eq!(m23.phase, Phase::PostSeason);
        assert_eq!(m23.staked, 0.0);
        assert_eq!(m23.locked, 123_000.0);
    }

    #[test]
    fn test_overlay() {
        let cal = AltseasonCalendar::default();
        let rows = allocate(&cal, None, &inputs(1.0));
        for row in &rows {
            let expected = row.locked.max(row.staked) + 1_000.0 * row.month as f64;
            assert_eq!(row.overlay, expected);
            assert!(!row.goal_fulfilled);
            assert_eq!(row.realized, 0.0);
        }
    }

    #[test]
    fn test_goal_realized_once() {
        let cal = AltseasonCalendar { start_month: 18, duration_months: 4 };
        // Month 18 holds 118k tokens at $2 = $236k, above the $100k goal
        let rows = allocate(&cal, Some(100_000.0), &inputs(2.0));

        assert!(!rows[16].goal_fulfilled);
        let m18 = rows[17];
        assert!(m18.goal_fulfilled);
        assert_relative_eq!(m18.realized, 50_000.0);
        assert_relative_eq!(m18.staked, 68_000.0);

        // No second realization later in the window
        let m19 = rows[18];
        assert_relative_eq!(m19.realized, 50_000.0);
        assert_relative_eq!(m19.staked, 69_000.0);

        // Realized tokens stay out after the window
        let m23 = rows[22];
        assert!(m23.goal_fulfilled);
        assert_relative_eq!(m23.locked, 73_000.0);

        for (row, input) in rows.iter().zip(inputs(2.0)) {
            assert_relative_eq!(
                row.locked + row.staked + row.realized,
                input.available,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_goal_never_reached() {
        let cal = AltseasonCalendar::default();
        let rows = allocate(&cal, Some(1e12), &inputs(1.0));
        assert!(rows.iter().all(|r| !r.goal_fulfilled && r.realized == 0.0));
    }
}
