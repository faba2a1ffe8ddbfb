//! Projection engine for monthly token, vesting and profit series

mod rewards;
mod allocation;
mod series;
mod goals;
mod engine;

pub use rewards::{accrue_rewards, RewardRow};
pub use allocation::{allocate, AllocationInput, AllocationRow};
pub use series::{MonthlyRow, MonthlySeries};
pub use goals::{break_even_price, nearest_index, profit_price_sweep, GoalCrossing, SweepPoint};
pub use engine::{ProjectionConfig, ProjectionEngine};

// ============================================================================
// Horizons
// ============================================================================
// Full strategy reports run over two years of monthly steps; the vesting-only
// report stops once the main allocation has fully unlocked.

/// Default horizon for reward, price and allocation projections
pub const PROJECTION_HORIZON_MONTHS: u32 = 24;

/// Horizon for the vesting-only report
pub const VESTING_HORIZON_MONTHS: u32 = 14;

// ============================================================================
// Profit goals
// ============================================================================

/// Minimum profit goal (USD)
pub const MIN_PROFIT_GOAL: f64 = 1_000_000.0;

/// Optimal profit goal (USD)
pub const OPTIMAL_PROFIT_GOAL: f64 = 5_000_000.0;
