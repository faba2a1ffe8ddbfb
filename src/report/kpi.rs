//! Key performance indicators table

use std::fmt;

use serde::Serialize;

use super::StrategyProfile;
use crate::assumptions::AssumptionSet;
use crate::projection::MonthlySeries;

/// Typed KPI value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KpiValue {
    Tokens(f64),
    Usd(f64),
    /// Percentage points (5.0 = 5%)
    Percent(f64),
    Months(u32),
    /// Month index, or none if the event never happens in the horizon
    Month(Option<u32>),
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::Tokens(v) => write!(f, "{:.0}", v),
            KpiValue::Usd(v) => write!(f, "${:.2}", v),
            KpiValue::Percent(v) => write!(f, "{}%", v),
            KpiValue::Months(v) => write!(f, "{}", v),
            KpiValue::Month(Some(m)) => write!(f, "month {}", m),
            KpiValue::Month(None) => f.write_str("not reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub name: &'static str,
    pub value: KpiValue,
}

fn kpi(name: &'static str, value: KpiValue) -> Kpi {
    Kpi { name, value }
}

/// Build the KPI table for a projected series
pub fn build_kpis(
    assumptions: &AssumptionSet,
    profile: &StrategyProfile,
    series: &MonthlySeries,
) -> Vec<Kpi> {
    let holdings = &assumptions.holdings;
    let rewards = &assumptions.rewards;
    let vesting = &assumptions.vesting;
    let final_tokens = series.last().map(|r| r.total_tokens).unwrap_or(holdings.allocation());

    vec![
        kpi("Main Allocation Tokens", KpiValue::Tokens(holdings.main_tokens as f64)),
        kpi("Secondary Allocation Tokens", KpiValue::Tokens(holdings.secondary_tokens as f64)),
        kpi("Total Tokens Held", KpiValue::Tokens(holdings.allocation())),
        kpi("TGE Release % (Main)", KpiValue::Percent(vesting.main.tge_fraction * 100.0)),
        kpi("TGE Release % (Secondary)", KpiValue::Percent(vesting.secondary.tge_fraction * 100.0)),
        kpi("Main Lock Period (Months)", KpiValue::Months(vesting.main.cliff_months)),
        kpi("Main Vesting Period (Months)", KpiValue::Months(vesting.main.vesting_months)),
        kpi(
            "Secondary Vesting Period (Months)",
            KpiValue::Months(vesting.secondary.vesting_months),
        ),
        kpi("Staking APY (Estimated)", KpiValue::Percent(profile.staking_apy_pct)),
        kpi("Locking APY (Estimated)", KpiValue::Percent(profile.locking_apy_pct)),
        kpi("Locking Pool Share (%)", KpiValue::Percent(rewards.lock_pool_share_pct)),
        kpi("Staking Pool Share (%)", KpiValue::Percent(rewards.stake_pool_share_pct)),
        kpi("Transaction Fee Rate (%)", KpiValue::Percent(rewards.fee_rate * 100.0)),
        kpi("Initial DEX Volume (USD/day)", KpiValue::Usd(rewards.volume_start)),
        kpi("Expected DEX Volume at Ramp End (USD/day)", KpiValue::Usd(rewards.volume_end)),
        kpi("Initial Token Price (USD)", KpiValue::Usd(holdings.initial_token_price)),
        kpi("Target Sell Price (USD)", KpiValue::Usd(profile.target_sell_price)),
        kpi("Upper Sell Price Potential (USD)", KpiValue::Usd(profile.upper_sell_price)),
        kpi("Minimum Profit Goal (USD)", KpiValue::Usd(profile.min_profit_goal)),
        kpi("Optimal Profit Goal (USD)", KpiValue::Usd(profile.optimal_profit_goal)),
        kpi("Annual Profit Target (USD)", KpiValue::Usd(profile.annual_profit_target)),
        kpi("Altseason Start", KpiValue::Month(Some(assumptions.altseason.start_month))),
        kpi("Post-Season Locking Plan (Months)", KpiValue::Months(profile.post_season_lock_months)),
        kpi("Estimated Tokens at Horizon", KpiValue::Tokens(final_tokens)),
        kpi(
            "Value at Target Sell Price (USD)",
            KpiValue::Usd(final_tokens * profile.target_sell_price),
        ),
        kpi(
            "Minimum Goal Reached",
            KpiValue::Month(series.first_month_reaching(profile.min_profit_goal)),
        ),
        kpi(
            "Optimal Goal Reached",
            KpiValue::Month(series.first_month_reaching(profile.optimal_profit_goal)),
        ),
    ]
}
