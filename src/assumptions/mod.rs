//! Assumption set driving a projection run
//!
//! An `AssumptionSet` is built once from user input and is immutable for the
//! duration of a run. Validation happens up front so the formulas downstream
//! never see an undefined input (zero token price, empty altseason window).

mod market;
mod vesting;
mod price;
mod calendar;
pub mod scenario;
pub mod loader;

pub use market::{MonthlyReward, RewardAssumptions, RewardSplit, DAYS_PER_MONTH};
pub use vesting::{TrancheSchedule, VestingRow, VestingSchedule};
pub use price::{PriceCurve, PricePoint};
pub use calendar::{AltseasonCalendar, Phase};
pub use scenario::ScenarioParams;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, ProjectionError, Result};

/// Tokens held before any rewards, and their price at TGE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Holdings {
    pub main_tokens: u64,
    pub secondary_tokens: u64,
    /// USD per token at month 0, also the reward conversion price
    pub initial_token_price: f64,
}

impl Default for Holdings {
    fn default() -> Self {
        Self {
            main_tokens: 457_143,
            secondary_tokens: 45_834,
            initial_token_price: 0.04,
        }
    }
}

impl Holdings {
    /// main + secondary allocation, in tokens
    pub fn allocation(&self) -> f64 {
        self.main_tokens as f64 + self.secondary_tokens as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.main_tokens.checked_add(self.secondary_tokens).is_none() {
            return Err(ProjectionError::invalid(
                "holdings",
                "main_tokens + secondary_tokens overflows u64",
            ));
        }
        ensure_positive("initial_token_price", self.initial_token_price)
    }
}

/// Full set of economic assumptions for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AssumptionSet {
    #[serde(default)]
    pub holdings: Holdings,

    #[serde(default)]
    pub rewards: RewardAssumptions,

    #[serde(default)]
    pub vesting: VestingSchedule,

    #[serde(default)]
    pub price_curve: PriceCurve,

    #[serde(default)]
    pub altseason: AltseasonCalendar,

    /// USD goal realized once during altseason; `None` keeps all tokens staked
    #[serde(default)]
    pub profit_goal: Option<f64>,

    /// Calendar date of TGE, used to label projection months
    #[serde(default)]
    pub tge_date: Option<NaiveDate>,
}

impl AssumptionSet {
    /// Validate everything a full projection over `horizon` months relies on
    pub fn validate(&self, horizon: u32) -> Result<()> {
        self.holdings.validate()?;
        self.rewards.validate()?;
        self.vesting.validate()?;
        self.price_curve.validate()?;
        self.altseason.validate(horizon)?;
        if let Some(goal) = self.profit_goal {
            ensure_positive("profit_goal", goal)?;
        }
        Ok(())
    }

    /// Calendar date of projection month `month`, if a TGE date is set
    pub fn calendar_date(&self, month: u32) -> Option<NaiveDate> {
        self.tge_date
            .and_then(|tge| tge.checked_add_months(Months::new(month)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let assumptions = AssumptionSet::default();
        assert!(assumptions.validate(24).is_ok());
        assert_eq!(assumptions.holdings.allocation(), 502_977.0);
    }

    #[test]
    fn test_rejects_non_positive_token_price() {
        let mut assumptions = AssumptionSet::default();
        assumptions.holdings.initial_token_price = 0.0;
        match assumptions.validate(24) {
            Err(ProjectionError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "initial_token_price")
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_overflowing_allocation() {
        let json = r#"{"holdings":{"main_tokens":18446744073709551615,"secondary_tokens":45834,"initial_token_price":0.04}}"#;
        let assumptions: AssumptionSet = serde_json::from_str(json).unwrap();
        match assumptions.validate(24) {
            Err(ProjectionError::InvalidParameter { name, .. }) => assert_eq!(name, "holdings"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        // No overflow when summing for display
        assert!(assumptions.holdings.allocation() > 1.8e19);
    }

    #[test]
    fn test_rejects_altseason_outside_horizon() {
        let mut assumptions = AssumptionSet::default();
        assumptions.altseason.start_month = 25;
        assert!(assumptions.validate(24).is_err());
        assumptions.altseason = AltseasonCalendar { start_month: 10, duration_months: 0 };
        assert!(assumptions.validate(24).is_err());
    }

    #[test]
    fn test_calendar_date() {
        let assumptions = AssumptionSet {
            tge_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        };
        assert_eq!(assumptions.calendar_date(18), NaiveDate::from_ymd_opt(2026, 7, 15));
        assert_eq!(AssumptionSet::default().calendar_date(18), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"holdings":{"main_tokens":1000,"secondary_tokens":0,"initial_token_price":0.1}}"#;
        let assumptions: AssumptionSet = serde_json::from_str(json).unwrap();
        assert_eq!(assumptions.holdings.main_tokens, 1000);
        assert_eq!(assumptions.rewards, RewardAssumptions::default());
        assert_eq!(assumptions.altseason, AltseasonCalendar::default());
    }
}
