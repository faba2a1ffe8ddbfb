//! Run a single scenario and write the requested report
//!
//! Projection series are written as CSV (or JSON with `--json`); every other
//! report is written as JSON.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::info;

use strategy_projection::assumptions::loader::load_assumptions;
use strategy_projection::{build_report, Report, ReportKind, ScenarioParams, StrategyProfile};

#[derive(Parser, Debug)]
#[command(about = "Project token rewards, vesting and profit for one scenario")]
struct Args {
    /// Report to produce (projection, vesting, profit_sweep, kpis, timeline)
    #[arg(short, long, default_value = "projection")]
    report: ReportKind,

    /// JSON assumption set; overrides the scenario flags below
    #[arg(short, long)]
    assumptions: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the projection series as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// TGE date used to label months (YYYY-MM-DD)
    #[arg(long)]
    tge_date: Option<NaiveDate>,

    /// Transaction fee rate (%)
    #[arg(long, default_value_t = 0.1)]
    fee_rate_pct: f64,

    /// Start DEX volume ($M/day)
    #[arg(long, default_value_t = 100.0)]
    volume_start: f64,

    /// End DEX volume ($M/day)
    #[arg(long, default_value_t = 300.0)]
    volume_end: f64,

    /// Lock pool share (%)
    #[arg(long, default_value_t = 0.5)]
    lock_share: f64,

    /// Staking pool share (%)
    #[arg(long, default_value_t = 4.0)]
    stake_share: f64,

    #[arg(long, default_value_t = 18)]
    altseason_start: u32,

    #[arg(long, default_value_t = 4)]
    altseason_duration: u32,

    /// USD goal realized once during altseason
    #[arg(long)]
    profit_goal: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = match &args.assumptions {
        Some(path) => load_assumptions(path)
            .with_context(|| format!("Failed to load assumptions from {}", path.display()))?,
        None => ScenarioParams {
            fee_rate_pct: args.fee_rate_pct,
            volume_start_musd: args.volume_start,
            volume_end_musd: args.volume_end,
            lock_pool_share_pct: args.lock_share,
            stake_pool_share_pct: args.stake_share,
            altseason_start_month: args.altseason_start,
            altseason_duration_months: args.altseason_duration,
            profit_goal: args.profit_goal,
            ..Default::default()
        }
        .to_assumptions(),
    };
    if args.tge_date.is_some() {
        assumptions.tge_date = args.tge_date;
    }

    let report = build_report(args.report, &assumptions, &StrategyProfile::default())
        .with_context(|| format!("Failed to build {} report", args.report))?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match &report {
        Report::Projection { series, goals } if !args.json => {
            series.write_csv(&mut out)?;
            for goal in goals {
                let first = match goal.first_reached {
                    Some(m) => format!("first reached month {}", m),
                    None => "not reached".to_string(),
                };
                info!(
                    "Goal ${:.0}: nearest month {} (profit ${:.0}, gap ${:.0}), {}",
                    goal.target, goal.month, goal.projected_profit, goal.gap, first
                );
            }
        }
        _ => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        info!("Output written to {}", path.display());
    }
    Ok(())
}
