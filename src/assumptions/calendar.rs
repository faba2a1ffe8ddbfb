//! Altseason calendar: the three-phase locking/staking timeline

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProjectionError, Result};

/// Allocation phase for a projection month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Before the altseason window: tokens are locked
    PreSeason,
    /// Inside the altseason window: tokens are staked
    Altseason,
    /// After the window: tokens are re-locked
    PostSeason,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PreSeason => "pre_season",
            Phase::Altseason => "altseason",
            Phase::PostSeason => "post_season",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Altseason window in projection months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltseasonCalendar {
    /// First month of the altseason window
    pub start_month: u32,
    /// Length of the window in months
    pub duration_months: u32,
}

impl Default for AltseasonCalendar {
    fn default() -> Self {
        Self {
            start_month: 18,
            duration_months: 4,
        }
    }
}

impl AltseasonCalendar {
    /// Start must fall inside 1..=horizon and the window must be non-empty
    pub fn validate(&self, horizon: u32) -> Result<()> {
        if self.duration_months == 0 {
            return Err(ProjectionError::invalid("altseason.duration_months", "must be >= 1"));
        }
        if self.start_month == 0 || self.start_month > horizon {
            return Err(ProjectionError::invalid(
                "altseason.start_month",
                format!("must be within 1..={horizon}, got {}", self.start_month),
            ));
        }
        Ok(())
    }

    /// First month after the window
    pub fn end_month(&self) -> u32 {
        self.start_month.saturating_add(self.duration_months)
    }

    pub fn phase(&self, month: u32) -> Phase {
        if month < self.start_month {
            Phase::PreSeason
        } else if month < self.end_month() {
            Phase::Altseason
        } else {
            Phase::PostSeason
        }
    }
}
