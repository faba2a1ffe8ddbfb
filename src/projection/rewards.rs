//! Reward accrual over the projection horizon

use serde::Serialize;

use crate::assumptions::AssumptionSet;

/// Reward components and running totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardRow {
    pub month: u32,
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
}

/// Compute monthly rewards and their partial sums for months 1..=horizon
///
/// Rewards are converted to tokens at the initial token price. Callers must
/// have validated the holdings (price > 0).
pub fn accrue_rewards(assumptions: &AssumptionSet, horizon: u32) -> Vec<RewardRow> {
    let price = assumptions.holdings.initial_token_price;

    (1..=horizon)
        .scan((0.0_f64, 0.0_f64), |(cum_usd, cum_tokens), month| {
            let reward = assumptions.rewards.reward_for_month(month);
            let lock_reward_tokens = reward.lock_reward_usd / price;
            let stake_reward_tokens = reward.stake_reward_usd / price;
            let reward_usd = reward.reward_usd();
            let reward_tokens = reward_usd / price;

            *cum_usd += reward_usd;
            *cum_tokens += reward_tokens;

            Some(RewardRow {
                month,
                volume: reward.volume,
                monthly_fee: reward.monthly_fee,
                lock_reward_usd: reward.lock_reward_usd,
                lock_reward_tokens,
                stake_reward_usd: reward.stake_reward_usd,
                stake_reward_tokens,
                reward_usd,
                reward_tokens,
                cumulative_reward_usd: *cum_usd,
                cumulative_reward_tokens: *cum_tokens,
            })
        })
        .collect()
}
