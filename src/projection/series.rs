//! Monthly projection rows and the series they form

use std::io::Write;

use chrono::NaiveDate;
use log::warn;
use serde::Serialize;

use super::goals::{nearest_index, GoalCrossing};
use crate::assumptions::Phase;
use crate::error::Result;

/// Projection output for a single month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub month: u32,
    /// Calendar month, when the run has a TGE date
    pub date: Option<NaiveDate>,

    // Reward accrual
    pub volume: f64,
    pub monthly_fee: f64,
    pub lock_reward_usd: f64,
    pub lock_reward_tokens: f64,
    pub stake_reward_usd: f64,
    pub stake_reward_tokens: f64,
    pub reward_usd: f64,
    pub reward_tokens: f64,
    pub cumulative_reward_usd: f64,
    pub cumulative_reward_tokens: f64,
    /// Initial allocation + cumulative reward tokens
    pub total_tokens: f64,

    // Vesting
    pub main_vested: f64,
    pub secondary_vested: f64,
    pub vested_total: f64,
    pub vesting_total: f64,
    pub vested_pct: f64,
    pub vesting_pct: f64,

    // Price and profit
    pub expected_price: f64,
    /// total_tokens × expected_price
    pub projected_profit: f64,

    // Allocation
    pub phase: Phase,
    pub locked: f64,
    pub staked: f64,
    pub realized: f64,
    pub goal_fulfilled: bool,
    pub overlay: f64,
}

/// Ordered, non-empty sequence of monthly rows starting at month 1
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    rows: Vec<MonthlyRow>,
}

impl MonthlySeries {
    pub(crate) fn new(rows: Vec<MonthlyRow>) -> Self {
        debug_assert!(!rows.is_empty());
        Self { rows }
    }

    pub fn rows(&self) -> &[MonthlyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for 1-based `month`
    pub fn month(&self, month: u32) -> Option<&MonthlyRow> {
        (month as usize)
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
    }

    pub fn last(&self) -> Option<&MonthlyRow> {
        self.rows.last()
    }

    pub fn total_tokens(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.total_tokens).collect()
    }

    pub fn projected_profit(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.projected_profit).collect()
    }

    /// Month whose projected profit is nearest `target`
    pub fn goal_crossing(&self, target: f64) -> Option<GoalCrossing> {
        let profits = self.projected_profit();
        let idx = nearest_index(&profits, target)?;
        let row = &self.rows[idx];
        let crossing = GoalCrossing {
            target,
            month: row.month,
            projected_profit: row.projected_profit,
            gap: row.projected_profit - target,
            first_reached: self.first_month_reaching(target),
        };
        if !crossing.reached() {
            warn!(
                "Goal {:.0} not reached within {} months (nearest month {}, profit {:.0})",
                target,
                self.rows.len(),
                crossing.month,
                crossing.projected_profit
            );
        }
        Some(crossing)
    }

    /// First month whose projected profit meets `target`
    pub fn first_month_reaching(&self, target: f64) -> Option<u32> {
        self.rows
            .iter()
            .find(|r| r.projected_profit >= target)
            .map(|r| r.month)
    }

    /// Write the series as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
