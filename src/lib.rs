//! Token strategy projection engine
//!
//! Projects reward accrual, vesting, locked/staked allocation and price-driven
//! profit over a monthly horizon from a fixed set of economic assumptions.
//!
//! ```no_run
//! use strategy_projection::{AssumptionSet, ProjectionConfig, ProjectionEngine};
//!
//! let engine = ProjectionEngine::new(AssumptionSet::default(), ProjectionConfig::default());
//! let series = engine.project()?;
//! let goal = series.goal_crossing(1_000_000.0);
//! # Ok::<(), strategy_projection::ProjectionError>(())
//! ```

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod report;

pub use error::{ProjectionError, Result};
pub use assumptions::{AssumptionSet, ScenarioParams};
pub use projection::{MonthlyRow, MonthlySeries, ProjectionConfig, ProjectionEngine};
pub use report::{build_report, Report, ReportKind, StrategyProfile};
