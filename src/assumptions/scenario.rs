//! Scenario parameters in dashboard units
//!
//! Sliders and batch files express assumptions the way a user thinks about
//! them (fee rate in %, volume in $M/day). `ScenarioParams` captures that
//! form and converts it into an `AssumptionSet`.

use serde::{Deserialize, Serialize};

use super::{
    AltseasonCalendar, AssumptionSet, Holdings, PriceCurve, RewardAssumptions, RewardSplit,
    VestingSchedule,
};

/// Price curve selector for flat (CSV) scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    #[default]
    Logistic,
    PiecewiseLinear,
}

/// User-facing parameters for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Identifier carried through batch output
    #[serde(default)]
    pub scenario_id: u32,

    /// Transaction fee rate in percent (0.1 = 0.1%)
    #[serde(default = "default_fee_rate_pct")]
    pub fee_rate_pct: f64,

    /// Daily DEX volume at the start of the ramp ($M/day)
    #[serde(default = "default_volume_start")]
    pub volume_start_musd: f64,

    /// Daily DEX volume at the end of the ramp ($M/day)
    #[serde(default = "default_volume_end")]
    pub volume_end_musd: f64,

    /// Lock pool share in percent
    #[serde(default = "default_lock_share")]
    pub lock_pool_share_pct: f64,

    /// Staking pool share in percent
    #[serde(default = "default_stake_share")]
    pub stake_pool_share_pct: f64,

    #[serde(default)]
    pub price_mode: PriceMode,

    /// Logistic asymptote K (USD)
    #[serde(default = "default_price_k")]
    pub price_k: f64,

    /// Logistic growth rate r
    #[serde(default = "default_price_r")]
    pub price_r: f64,

    /// Logistic inflection month t0
    #[serde(default = "default_price_t0")]
    pub price_t0: f64,

    #[serde(default = "default_altseason_start")]
    pub altseason_start_month: u32,

    #[serde(default = "default_altseason_duration")]
    pub altseason_duration_months: u32,

    /// Optional USD goal realized once during altseason
    #[serde(default)]
    pub profit_goal: Option<f64>,
}

fn default_fee_rate_pct() -> f64 { 0.1 }
fn default_volume_start() -> f64 { 100.0 }
fn default_volume_end() -> f64 { 300.0 }
fn default_lock_share() -> f64 { 0.5 }
fn default_stake_share() -> f64 { 4.0 }
fn default_price_k() -> f64 { 10.0 }
fn default_price_r() -> f64 { 0.5 }
fn default_price_t0() -> f64 { 12.0 }
fn default_altseason_start() -> u32 { 18 }
fn default_altseason_duration() -> u32 { 4 }

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            scenario_id: 0,
            fee_rate_pct: 0.1,
            volume_start_musd: 100.0,
            volume_end_musd: 300.0,
            lock_pool_share_pct: 0.5,
            stake_pool_share_pct: 4.0,
            price_mode: PriceMode::Logistic,
            price_k: 10.0,
            price_r: 0.5,
            price_t0: 12.0,
            altseason_start_month: 18,
            altseason_duration_months: 4,
            profit_goal: None,
        }
    }
}

impl ScenarioParams {
    /// Convert dashboard units into engine units
    ///
    /// Holdings and vesting use the standard allocation; the result is not
    /// validated here, the engine validates against its horizon.
    pub fn to_assumptions(&self) -> AssumptionSet {
        let price_curve = match self.price_mode {
            PriceMode::Logistic => PriceCurve::Logistic {
                k: self.price_k,
                r: self.price_r,
                t0: self.price_t0,
            },
            PriceMode::PiecewiseLinear => PriceCurve::default_piecewise(),
        };

        AssumptionSet {
            holdings: Holdings::default(),
            rewards: RewardAssumptions {
                fee_rate: self.fee_rate_pct / 100.0,
                volume_start: self.volume_start_musd * 1_000_000.0,
                volume_end: self.volume_end_musd * 1_000_000.0,
                volume_ramp_months: 24,
                lock_pool_share_pct: self.lock_pool_share_pct,
                stake_pool_share_pct: self.stake_pool_share_pct,
                split: RewardSplit::default(),
            },
            vesting: VestingSchedule::default(),
            price_curve,
            altseason: AltseasonCalendar {
                start_month: self.altseason_start_month,
                duration_months: self.altseason_duration_months,
            },
            profit_goal: self.profit_goal,
            tge_date: None,
        }
    }
}
