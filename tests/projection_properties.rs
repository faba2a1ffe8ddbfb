//! End-to-end properties of the projection engine

use approx::assert_relative_eq;
use strategy_projection::assumptions::{AltseasonCalendar, Phase, PriceCurve};
use strategy_projection::projection::nearest_index;
use strategy_projection::{
    build_report, AssumptionSet, ProjectionConfig, ProjectionEngine, ProjectionError, Report,
    ReportKind, ScenarioParams, StrategyProfile,
};

const MAIN: f64 = 457_143.0;
const SECONDARY: f64 = 45_834.0;

fn scenario_grid() -> Vec<AssumptionSet> {
    let mut grid = Vec::new();
    for &fee_rate_pct in &[0.0, 0.01, 0.1, 0.5] {
        for &(start, end) in &[(100.0, 300.0), (300.0, 10.0), (50.0, 50.0), (0.0, 0.0)] {
            for &(lock, stake) in &[(0.1, 0.1), (0.5, 4.0), (5.0, 10.0)] {
                let params = ScenarioParams {
                    fee_rate_pct,
                    volume_start_musd: start,
                    volume_end_musd: end,
                    lock_pool_share_pct: lock,
                    stake_pool_share_pct: stake,
                    ..Default::default()
                };
                grid.push(params.to_assumptions());
            }
        }
    }
    grid
}

fn project(assumptions: AssumptionSet) -> strategy_projection::MonthlySeries {
    ProjectionEngine::new(assumptions, ProjectionConfig::default())
        .project()
        .expect("valid assumptions")
}

#[test]
fn test_total_tokens_non_decreasing_across_grid() {
    for assumptions in scenario_grid() {
        let series = project(assumptions);
        for w in series.rows().windows(2) {
            assert!(w[1].total_tokens >= w[0].total_tokens);
        }
    }
}

#[test]
fn test_vesting_bounded_across_horizons() {
    let mut assumptions = AssumptionSet::default();
    assumptions.altseason = AltseasonCalendar { start_month: 2, duration_months: 3 };
    let series = ProjectionEngine::new(assumptions, ProjectionConfig { horizon_months: 48 })
        .project()
        .unwrap();

    for row in series.rows() {
        assert!(row.main_vested <= MAIN);
        assert!(row.secondary_vested <= SECONDARY);
        assert!(row.vested_total <= MAIN + SECONDARY);
    }
    for w in series.rows().windows(2) {
        assert!(w[1].main_vested >= w[0].main_vested);
        assert!(w[1].secondary_vested >= w[0].secondary_vested);
    }
    assert_eq!(series.month(48).unwrap().main_vested, MAIN);
}

#[test]
fn test_vesting_phase_boundaries() {
    let series = project(AssumptionSet::default());
    let m6 = series.month(6).unwrap();
    assert_eq!(m6.main_vested, MAIN * 0.05);
    assert_eq!(m6.secondary_vested, SECONDARY);
    assert_eq!(series.month(14).unwrap().main_vested, MAIN);
}

#[test]
fn test_logistic_midpoint_and_monotonic() {
    let curve = PriceCurve::Logistic { k: 12.5, r: 0.35, t0: 9.0 };
    assert_eq!(curve.price(9.0), 6.25);
    let mut prev = 0.0;
    for m in 1..=24 {
        let p = curve.price(m as f64);
        assert!(p > prev);
        prev = p;
    }
}

#[test]
fn test_goal_lookup_exact_match() {
    assert_eq!(nearest_index(&[0.0, 500_000.0, 1_000_000.0, 2_000_000.0], 1_000_000.0), Some(2));
}

#[test]
fn test_reference_example_month_one() {
    let params = ScenarioParams {
        fee_rate_pct: 0.1,
        volume_start_musd: 100.0,
        volume_end_musd: 300.0,
        lock_pool_share_pct: 0.5,
        stake_pool_share_pct: 0.5,
        ..Default::default()
    };
    let series = project(params.to_assumptions());
    let m1 = series.month(1).unwrap();

    assert_relative_eq!(m1.volume, 108_333_333.3, max_relative = 1e-9);
    assert_relative_eq!(m1.monthly_fee, 3_250_000.0, max_relative = 1e-9);
    assert_relative_eq!(m1.lock_reward_usd, 2_275.0, max_relative = 1e-9);
    assert_relative_eq!(m1.stake_reward_usd, 13_975.0, max_relative = 1e-9);
    assert_relative_eq!(m1.reward_usd, 16_250.0, max_relative = 1e-9);
    assert_relative_eq!(m1.reward_tokens, 406_250.0, max_relative = 1e-9);
}

#[test]
fn test_phase_allocation_windows() {
    let mut assumptions = AssumptionSet::default();
    assumptions.altseason = AltseasonCalendar { start_month: 18, duration_months: 4 };
    let series = project(assumptions);

    let m17 = series.month(17).unwrap();
    assert_eq!((m17.phase, m17.staked), (Phase::PreSeason, 0.0));
    assert!(m17.locked > 0.0);

    let m19 = series.month(19).unwrap();
    assert_eq!((m19.phase, m19.locked), (Phase::Altseason, 0.0));
    assert!(m19.staked > 0.0);

    let m23 = series.month(23).unwrap();
    assert_eq!((m23.phase, m23.staked), (Phase::PostSeason, 0.0));
    assert!(m23.locked > 0.0);
}

#[test]
fn test_goal_realization_fires_once() {
    let mut assumptions = AssumptionSet::default();
    assumptions.profit_goal = Some(1_000_000.0);
    let series = project(assumptions);

    let fulfilled: Vec<u32> = series
        .rows()
        .iter()
        .filter(|r| r.goal_fulfilled)
        .map(|r| r.month)
        .collect();
    // Default altseason starts at 18 and holdings are worth far more than $1M by then
    assert_eq!(fulfilled.first(), Some(&18));
    assert_eq!(fulfilled.len(), 7);

    let m18 = series.month(18).unwrap();
    assert_relative_eq!(m18.realized * m18.expected_price, 1_000_000.0, max_relative = 1e-9);
    let realized_after: Vec<f64> = series.rows()[17..].iter().map(|r| r.realized).collect();
    assert!(realized_after.iter().all(|&r| r == m18.realized));
}

#[test]
fn test_idempotent_output() {
    let assumptions = AssumptionSet::default();
    let first = serde_json::to_vec(&project(assumptions.clone())).unwrap();
    let second = serde_json::to_vec(&project(assumptions)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validation_errors() {
    let mut assumptions = AssumptionSet::default();
    assumptions.holdings.initial_token_price = 0.0;
    let err = ProjectionEngine::new(assumptions, ProjectionConfig::default())
        .project()
        .unwrap_err();
    assert!(matches!(err, ProjectionError::InvalidParameter { name: "initial_token_price", .. }));

    let params = ScenarioParams { altseason_duration_months: 0, ..Default::default() };
    assert!(ProjectionEngine::new(params.to_assumptions(), ProjectionConfig::default())
        .project()
        .is_err());

    let params = ScenarioParams { altseason_start_month: 30, ..Default::default() };
    assert!(ProjectionEngine::new(params.to_assumptions(), ProjectionConfig::default())
        .project()
        .is_err());
}

#[test]
fn test_every_report_builds_with_defaults() {
    let assumptions = AssumptionSet::default();
    let profile = StrategyProfile::default();
    for kind in ReportKind::ALL {
        let report = build_report(kind, &assumptions, &profile).unwrap();
        let matches_kind = matches!(
            (kind, &report),
            (ReportKind::Projection, Report::Projection { .. })
                | (ReportKind::Vesting, Report::Vesting { .. })
                | (ReportKind::ProfitSweep, Report::ProfitSweep { .. })
                | (ReportKind::Kpis, Report::Kpis { .. })
                | (ReportKind::Timeline, Report::Timeline { .. })
        );
        assert!(matches_kind, "{} produced {:?}", kind, report);
    }
}
