//! Core projection engine

use log::debug;
use serde::{Deserialize, Serialize};

use super::allocation::{allocate, AllocationInput};
use super::rewards::accrue_rewards;
use super::series::{MonthlyRow, MonthlySeries};
use super::PROJECTION_HORIZON_MONTHS;
use crate::assumptions::AssumptionSet;
use crate::error::{ProjectionError, Result};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of months to project (months 1..=horizon)
    pub horizon_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: PROJECTION_HORIZON_MONTHS,
        }
    }
}

/// Stateless projection engine
///
/// `project()` is a pure function of the assumptions and config; running it
/// twice yields identical series.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: AssumptionSet,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: AssumptionSet, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &AssumptionSet {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full projection
    pub fn project(&self) -> Result<MonthlySeries> {
        let horizon = self.config.horizon_months;
        if horizon == 0 {
            return Err(ProjectionError::invalid("horizon_months", "must be >= 1"));
        }
        let a = &self.assumptions;
        a.validate(horizon)?;

        debug!(
            "Projecting {} months: fee_rate={}, volume {}..{}, altseason {}+{}",
            horizon,
            a.rewards.fee_rate,
            a.rewards.volume_start,
            a.rewards.volume_end,
            a.altseason.start_month,
            a.altseason.duration_months
        );

        let allocation = a.holdings.allocation();
        let rewards = accrue_rewards(a, horizon);

        // Vesting and price are closed-form per month
        let vesting: Vec<_> = (1..=horizon).map(|m| a.vesting.row(&a.holdings, m)).collect();
        let prices: Vec<f64> = (1..=horizon).map(|m| a.price_curve.price(m as f64)).collect();

        let inputs: Vec<AllocationInput> = rewards
            .iter()
            .zip(&vesting)
            .zip(&prices)
            .map(|((r, v), &price)| AllocationInput {
                month: r.month,
                available: v.vested_total + r.cumulative_reward_tokens,
                price,
                cumulative_reward_tokens: r.cumulative_reward_tokens,
            })
            .collect();
        let allocations = allocate(&a.altseason, a.profit_goal, &inputs);

        let rows = rewards
            .iter()
            .zip(&vesting)
            .zip(&prices)
            .zip(&allocations)
            .map(|(((r, v), &price), alloc)| {
                let total_tokens = allocation + r.cumulative_reward_tokens;
                MonthlyRow {
                    month: r.month,
                    date: a.calendar_date(r.month),
                    volume: r.volume,
                    monthly_fee: r.monthly_fee,
                    lock_reward_usd: r.lock_reward_usd,
                    lock_reward_tokens: r.lock_reward_tokens,
                    stake_reward_usd: r.stake_reward_usd,
                    stake_reward_tokens: r.stake_reward_tokens,
                    reward_usd: r.reward_usd,
                    reward_tokens: r.reward_tokens,
                    cumulative_reward_usd: r.cumulative_reward_usd,
                    cumulative_reward_tokens: r.cumulative_reward_tokens,
                    total_tokens,
                    main_vested: v.main_vested,
                    secondary_vested: v.secondary_vested,
                    vested_total: v.vested_total,
                    vesting_total: v.vesting_total,
                    vested_pct: v.vested_pct,
                    vesting_pct: v.vesting_pct,
                    expected_price: price,
                    projected_profit: total_tokens * price,
                    phase: alloc.phase,
                    locked: alloc.locked,
                    staked: alloc.staked,
                    realized: alloc.realized,
                    goal_fulfilled: alloc.goal_fulfilled,
                    overlay: alloc.overlay,
                }
            })
            .collect();

        Ok(MonthlySeries::new(rows))
    }
}
