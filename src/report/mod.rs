//! Report catalogue
//!
//! Each `ReportKind` maps to one pure computation over the projection engine.
//! Rendering (tables, charts, HTTP) is left to the binaries.

mod kpi;
mod timeline;

pub use kpi::{build_kpis, Kpi, KpiValue};
pub use timeline::{build_timeline, TimelineEvent};

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::assumptions::{AssumptionSet, VestingRow};
use crate::error::{ProjectionError, Result};
use crate::projection::{
    break_even_price, profit_price_sweep, GoalCrossing, MonthlySeries, ProjectionConfig,
    ProjectionEngine, SweepPoint, MIN_PROFIT_GOAL, OPTIMAL_PROFIT_GOAL,
    PROJECTION_HORIZON_MONTHS, VESTING_HORIZON_MONTHS,
};

/// Strategy settings shown alongside the projection but not used by it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Price at which the holder plans to sell (USD)
    #[serde(default = "default_target_sell_price")]
    pub target_sell_price: f64,

    /// Upper sell price potential (USD)
    #[serde(default = "default_upper_sell_price")]
    pub upper_sell_price: f64,

    /// Estimated staking APY in percent (display only)
    #[serde(default = "default_staking_apy")]
    pub staking_apy_pct: f64,

    /// Estimated locking APY in percent (display only)
    #[serde(default = "default_locking_apy")]
    pub locking_apy_pct: f64,

    #[serde(default = "default_min_goal")]
    pub min_profit_goal: f64,

    #[serde(default = "default_optimal_goal")]
    pub optimal_profit_goal: f64,

    /// Profit target for the first altseason year (USD)
    #[serde(default = "default_annual_target")]
    pub annual_profit_target: f64,

    /// Months tokens are re-locked after the altseason
    #[serde(default = "default_relock_months")]
    pub post_season_lock_months: u32,

    /// Month at which preparation for the next market cycle starts
    #[serde(default = "default_next_cycle_month")]
    pub next_cycle_month: u32,

    /// Price range and resolution for the profit sweep
    #[serde(default = "default_sweep_min")]
    pub sweep_min_price: f64,
    #[serde(default = "default_sweep_max")]
    pub sweep_max_price: f64,
    #[serde(default = "default_sweep_points")]
    pub sweep_points: usize,
}

fn default_target_sell_price() -> f64 { 2.0 }
fn default_upper_sell_price() -> f64 { 10.0 }
fn default_staking_apy() -> f64 { 50.0 }
fn default_locking_apy() -> f64 { 100.0 }
fn default_min_goal() -> f64 { MIN_PROFIT_GOAL }
fn default_optimal_goal() -> f64 { OPTIMAL_PROFIT_GOAL }
fn default_annual_target() -> f64 { 900_000.0 }
fn default_relock_months() -> u32 { 30 }
fn default_next_cycle_month() -> u32 { 60 }
fn default_sweep_min() -> f64 { 0.01 }
fn default_sweep_max() -> f64 { 12.0 }
fn default_sweep_points() -> usize { 300 }

impl Default for StrategyProfile {
    fn default() -> Self {
        Self {
            target_sell_price: default_target_sell_price(),
            upper_sell_price: default_upper_sell_price(),
            staking_apy_pct: default_staking_apy(),
            locking_apy_pct: default_locking_apy(),
            min_profit_goal: default_min_goal(),
            optimal_profit_goal: default_optimal_goal(),
            annual_profit_target: default_annual_target(),
            post_season_lock_months: default_relock_months(),
            next_cycle_month: default_next_cycle_month(),
            sweep_min_price: default_sweep_min(),
            sweep_max_price: default_sweep_max(),
            sweep_points: default_sweep_points(),
        }
    }
}

impl StrategyProfile {
    pub fn goals(&self) -> [f64; 2] {
        [self.min_profit_goal, self.optimal_profit_goal]
    }
}

/// Available reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Full monthly series with goal crossings
    Projection,
    /// Vesting-only schedule
    Vesting,
    /// Profit vs. token price at the horizon's token balance
    ProfitSweep,
    /// KPI table
    Kpis,
    /// Strategic timeline
    Timeline,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::Projection,
        ReportKind::Vesting,
        ReportKind::ProfitSweep,
        ReportKind::Kpis,
        ReportKind::Timeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Projection => "projection",
            ReportKind::Vesting => "vesting",
            ReportKind::ProfitSweep => "profit_sweep",
            ReportKind::Kpis => "kpis",
            ReportKind::Timeline => "timeline",
        }
    }

    pub fn default_horizon(&self) -> u32 {
        match self {
            ReportKind::Vesting => VESTING_HORIZON_MONTHS,
            _ => PROJECTION_HORIZON_MONTHS,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ReportKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| ProjectionError::invalid("report", format!("unknown report `{s}`")))
    }
}

/// Price at which the final token balance is worth a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEven {
    pub goal: f64,
    pub price: Option<f64>,
}

/// Computed report, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Projection {
        series: MonthlySeries,
        goals: Vec<GoalCrossing>,
    },
    Vesting {
        rows: Vec<VestingRow>,
    },
    ProfitSweep {
        tokens: f64,
        points: Vec<SweepPoint>,
        break_even: Vec<BreakEven>,
    },
    Kpis {
        kpis: Vec<Kpi>,
    },
    Timeline {
        events: Vec<TimelineEvent>,
    },
}

fn project(assumptions: &AssumptionSet) -> Result<MonthlySeries> {
    ProjectionEngine::new(assumptions.clone(), ProjectionConfig::default()).project()
}

/// Build the report for `kind`
pub fn build_report(
    kind: ReportKind,
    assumptions: &AssumptionSet,
    profile: &StrategyProfile,
) -> Result<Report> {
    info!("Building {} report", kind);

    let report = match kind {
        ReportKind::Projection => {
            let series = project(assumptions)?;
            let goals = profile
                .goals()
                .iter()
                .filter_map(|&g| series.goal_crossing(g))
                .collect();
            Report::Projection { series, goals }
        }
        ReportKind::Vesting => {
            assumptions.holdings.validate()?;
            let rows = assumptions
                .vesting
                .project(&assumptions.holdings, kind.default_horizon())?;
            Report::Vesting { rows }
        }
        ReportKind::ProfitSweep => {
            let series = project(assumptions)?;
            let tokens = series.last().map(|r| r.total_tokens).unwrap_or(0.0);
            let points = profit_price_sweep(
                tokens,
                profile.sweep_min_price,
                profile.sweep_max_price,
                profile.sweep_points,
            );
            let break_even = profile
                .goals()
                .iter()
                .map(|&goal| BreakEven { goal, price: break_even_price(goal, tokens) })
                .collect();
            Report::ProfitSweep { tokens, points, break_even }
        }
        ReportKind::Kpis => {
            let series = project(assumptions)?;
            Report::Kpis { kpis: build_kpis(assumptions, profile, &series) }
        }
        ReportKind::Timeline => {
            assumptions.validate(PROJECTION_HORIZON_MONTHS)?;
            Report::Timeline { events: build_timeline(assumptions, profile) }
        }
    };

    Ok(report)
}
