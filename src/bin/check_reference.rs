//! Compare engine output with hand-computed reference values
//! Reference case: fee 0.1%, volume $100M -> $300M/day, lock/stake share 0.5%

use strategy_projection::{AssumptionSet, ProjectionConfig, ProjectionEngine};

fn main() -> anyhow::Result<()> {
    let mut assumptions = AssumptionSet::default();
    assumptions.rewards.lock_pool_share_pct = 0.5;
    assumptions.rewards.stake_pool_share_pct = 0.5;

    let series = ProjectionEngine::new(assumptions, ProjectionConfig::default()).project()?;
    let m1 = series
        .month(1)
        .ok_or_else(|| anyhow::anyhow!("projection has no month 1"))?;

    println!("Engine vs reference (month 1)");
    println!("{:<16} {:<18} {:<18} {:<12}", "Field", "Engine", "Reference", "Diff");

    let reference = [
        ("volume", m1.volume, 108_333_333.333_333_3),
        ("monthly_fee", m1.monthly_fee, 3_250_000.0),
        ("lock_reward", m1.lock_reward_usd, 2_275.0),
        ("stake_reward", m1.stake_reward_usd, 13_975.0),
        ("reward_usd", m1.reward_usd, 16_250.0),
        ("reward_tokens", m1.reward_tokens, 406_250.0),
    ];

    for (field, engine, expected) in reference.iter() {
        println!("{:<16} {:<18.6} {:<18.6} {:<12.3e}", field, engine, expected, engine - expected);
    }

    println!("\nVesting boundaries");
    for month in [6u32, 14] {
        if let Some(row) = series.month(month) {
            println!(
                "  Month {:>2}: main={:.2}, secondary={:.2}, vested={:.2}%",
                month, row.main_vested, row.secondary_vested, row.vested_pct
            );
        }
    }
    Ok(())
}
