//! Protocol fee revenue and reward pool assumptions
//!
//! Monthly fee revenue is derived from a linearly interpolated daily trading
//! volume. A fixed split of that revenue feeds the lock and stake reward
//! pools; the holder's share of each pool is converted to tokens at the
//! initial token price.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ProjectionError, Result};

/// Days of trading counted in one projection month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Fraction of monthly fee revenue attributed to each reward pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardSplit {
    /// Lock-reward pool fraction (0.14 = 14%)
    pub lock_fraction: f64,
    /// Stake-reward pool fraction (0.86 = 86%)
    pub stake_fraction: f64,
}

impl Default for RewardSplit {
    fn default() -> Self {
        Self {
            lock_fraction: 0.14,
            stake_fraction: 0.86,
        }
    }
}

/// Fee, volume and pool-share assumptions driving reward accrual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardAssumptions {
    /// Fraction of trading volume collected as fee (0.001 = 0.1%)
    pub fee_rate: f64,

    /// Daily trading volume (USD) used as the ramp origin
    pub volume_start: f64,

    /// Daily trading volume (USD) reached at `volume_ramp_months`
    pub volume_end: f64,

    /// Month at which the volume ramp reaches `volume_end`
    #[serde(default = "default_ramp_months")]
    pub volume_ramp_months: u32,

    /// Holder's share of the lock pool in percent (0.5 = 0.5%)
    pub lock_pool_share_pct: f64,

    /// Holder's share of the stake pool in percent (4.0 = 4%)
    pub stake_pool_share_pct: f64,

    #[serde(default)]
    pub split: RewardSplit,
}

fn default_ramp_months() -> u32 { 24 }

impl Default for RewardAssumptions {
    fn default() -> Self {
        Self {
            fee_rate: 0.001,                // 0.1% per trade
            volume_start: 100_000_000.0,    // $100M/day
            volume_end: 300_000_000.0,      // $300M/day
            volume_ramp_months: 24,
            lock_pool_share_pct: 0.5,
            stake_pool_share_pct: 4.0,
            split: RewardSplit::default(),
        }
    }
}

/// Reward components for a single month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReward {
    pub volume: f64,
    pub monthly_fee: f64,
    pub lock_reward_usd: f64,
    pub stake_reward_usd: f64,
}

impl MonthlyReward {
    pub fn reward_usd(&self) -> f64 {
        self.lock_reward_usd + self.stake_reward_usd
    }
}

impl RewardAssumptions {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("fee_rate", self.fee_rate)?;
        ensure_non_negative("volume_start", self.volume_start)?;
        ensure_non_negative("volume_end", self.volume_end)?;
        ensure_non_negative("lock_pool_share_pct", self.lock_pool_share_pct)?;
        ensure_non_negative("stake_pool_share_pct", self.stake_pool_share_pct)?;
        ensure_non_negative("split.lock_fraction", self.split.lock_fraction)?;
        ensure_non_negative("split.stake_fraction", self.split.stake_fraction)?;
        if self.volume_ramp_months == 0 {
            return Err(ProjectionError::invalid("volume_ramp_months", "must be >= 1"));
        }
        Ok(())
    }

    /// Daily volume at month `m`: start + (end - start) * (m / ramp)
    ///
    /// Volume holds at `volume_end` for months past the ramp.
    pub fn volume(&self, month: u32) -> f64 {
        let progress = (month as f64 / self.volume_ramp_months as f64).min(1.0);
        self.volume_start + (self.volume_end - self.volume_start) * progress
    }

    /// Monthly fee revenue: volume × fee rate × 30 days
    pub fn monthly_fee(&self, month: u32) -> f64 {
        self.volume(month) * self.fee_rate * DAYS_PER_MONTH
    }

    /// Calculate the lock/stake pool rewards earned in `month`
    pub fn reward_for_month(&self, month: u32) -> MonthlyReward {
        let volume = self.volume(month);
        let monthly_fee = volume * self.fee_rate * DAYS_PER_MONTH;
        let lock_reward_usd =
            monthly_fee * self.split.lock_fraction * (self.lock_pool_share_pct / 100.0);
        let stake_reward_usd =
            monthly_fee * self.split.stake_fraction * (self.stake_pool_share_pct / 100.0);

        MonthlyReward {
            volume,
            monthly_fee,
            lock_reward_usd,
            stake_reward_usd,
        }
    }
}
