//! Strategic timeline of vesting and altseason milestones

use chrono::NaiveDate;
use serde::Serialize;

use super::StrategyProfile;
use crate::assumptions::AssumptionSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub event: &'static str,
    pub month: u32,
    pub date: Option<NaiveDate>,
    pub description: &'static str,
}

/// Milestones in month order
pub fn build_timeline(
    assumptions: &AssumptionSet,
    profile: &StrategyProfile,
) -> Vec<TimelineEvent> {
    let vesting = &assumptions.vesting;
    let altseason = &assumptions.altseason;

    let mut events = vec![
        ("TGE", 0, "TGE complete"),
        ("Main Vesting Start", vesting.main.cliff_months, "Main allocation lock ends"),
        (
            "Secondary Fully Vested",
            vesting.secondary.full_vesting_month(),
            "Secondary allocation unlocked",
        ),
        ("Main Fully Vested", vesting.main.full_vesting_month(), "Main allocation unlocked"),
        ("Target Sell Window", altseason.start_month, "Altseason begins, tokens staked"),
        ("Re-lock", altseason.end_month(), "Altseason ends, tokens re-locked"),
        ("Next Cycle Prep", profile.next_cycle_month, "Next market cycle opportunity"),
    ]
    .into_iter()
    .map(|(event, month, description)| TimelineEvent {
        event,
        month,
        date: assumptions.calendar_date(month),
        description,
    })
    .collect::<Vec<_>>();

    events.sort_by_key(|e| e.month);
    events
}
