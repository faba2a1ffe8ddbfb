//! Token vesting schedules
//!
//! Each allocation (tranche) follows a TGE release, an optional lock period
//! (cliff) and a linear unlock of the remainder. Vested amounts are clamped at
//! the allocation once the linear period has elapsed.

use serde::{Deserialize, Serialize};

use super::Holdings;
use crate::error::{ProjectionError, Result};

/// TGE + cliff + linear vesting for one allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrancheSchedule {
    /// Fraction released at TGE (0.05 = 5%)
    pub tge_fraction: f64,

    /// Months after TGE during which only the TGE fraction is available
    pub cliff_months: u32,

    /// Months of linear vesting after the cliff until 100% is unlocked
    pub vesting_months: u32,
}

impl TrancheSchedule {
    /// Main allocation: 5% at TGE, 6-month lock, then 8 months linear
    pub fn main_default() -> Self {
        Self {
            tge_fraction: 0.05,
            cliff_months: 6,
            vesting_months: 8,
        }
    }

    /// Secondary allocation: 10% at TGE, linear to 100% over 6 months
    pub fn secondary_default() -> Self {
        Self {
            tge_fraction: 0.10,
            cliff_months: 0,
            vesting_months: 6,
        }
    }

    pub fn validate(&self, name: &'static str) -> Result<()> {
        if !(0.0..=1.0).contains(&self.tge_fraction) {
            return Err(ProjectionError::invalid(
                name,
                format!("tge_fraction must be within [0, 1], got {}", self.tge_fraction),
            ));
        }
        if self.vesting_months == 0 {
            return Err(ProjectionError::invalid(name, "vesting_months must be >= 1"));
        }
        Ok(())
    }

    /// Month at which the allocation is fully vested
    pub fn full_vesting_month(&self) -> u32 {
        self.cliff_months + self.vesting_months
    }

    /// Tokens vested at `month` out of `allocation`
    ///
    /// Never exceeds `allocation`: months past `full_vesting_month()` return
    /// the allocation itself rather than extrapolating the linear ramp.
    pub fn vested(&self, allocation: f64, month: u32) -> f64 {
        let tge_amount = allocation * self.tge_fraction;
        if month <= self.cliff_months {
            return tge_amount;
        }

        let elapsed = month - self.cliff_months;
        if elapsed >= self.vesting_months {
            return allocation;
        }

        let progress = elapsed as f64 / self.vesting_months as f64;
        tge_amount + progress * allocation * (1.0 - self.tge_fraction)
    }
}

/// Vesting schedules for the main and secondary allocations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub main: TrancheSchedule,
    pub secondary: TrancheSchedule,
}

impl Default for VestingSchedule {
    fn default() -> Self {
        Self {
            main: TrancheSchedule::main_default(),
            secondary: TrancheSchedule::secondary_default(),
        }
    }
}

/// Vesting status for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestingRow {
    pub month: u32,
    pub main_vested: f64,
    pub secondary_vested: f64,
    /// main_vested + secondary_vested
    pub vested_total: f64,
    /// Allocation not yet unlocked
    pub vesting_total: f64,
    /// vested_total as % of total allocation
    pub vested_pct: f64,
    /// vesting_total as % of total allocation
    pub vesting_pct: f64,
}

impl VestingSchedule {
    pub fn validate(&self) -> Result<()> {
        self.main.validate("vesting.main")?;
        self.secondary.validate("vesting.secondary")
    }

    /// Month at which both allocations are fully vested
    pub fn full_vesting_month(&self) -> u32 {
        self.main.full_vesting_month().max(self.secondary.full_vesting_month())
    }

    pub fn row(&self, holdings: &Holdings, month: u32) -> VestingRow {
        let main_vested = self.main.vested(holdings.main_tokens as f64, month);
        let secondary_vested = self.secondary.vested(holdings.secondary_tokens as f64, month);
        let allocation = holdings.allocation();
        let vested_total = main_vested + secondary_vested;
        let vesting_total = allocation - vested_total;

        let (vested_pct, vesting_pct) = if allocation > 0.0 {
            (vested_total / allocation * 100.0, vesting_total / allocation * 100.0)
        } else {
            (0.0, 0.0)
        };

        VestingRow {
            month,
            main_vested,
            secondary_vested,
            vested_total,
            vesting_total,
            vested_pct,
            vesting_pct,
        }
    }

    /// Vesting status for months 1..=horizon, independent of rewards
    pub fn project(&self, holdings: &Holdings, horizon: u32) -> Result<Vec<VestingRow>> {
        self.validate()?;
        if horizon == 0 {
            return Err(ProjectionError::invalid("horizon", "must be >= 1 month"));
        }
        Ok((1..=horizon).map(|m| self.row(holdings, m)).collect())
    }
}
