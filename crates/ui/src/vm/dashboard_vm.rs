use progress_core::model::ProgressRecord;
use progress_core::summary::{ProgressStats, RECENT_ACTIVITY_LIMIT, recent_activities};

use crate::vm::activity_vm::ActivityVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub label: &'static str,
    pub value: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardVm {
    pub stats: Vec<StatCardVm>,
    pub recent: Vec<ActivityVm>,
}

impl DashboardVm {
    /// Dashboard for an empty record list: all counts zero, no activity.
    #[must_use]
    pub fn empty() -> Self {
        map_dashboard(&[])
    }
}

#[must_use]
pub fn map_dashboard(records: &[ProgressRecord]) -> DashboardVm {
    let stats = ProgressStats::from_records(records)
        .entries()
        .map(|(kind, value)| StatCardVm {
            label: kind.label(),
            value,
        })
        .collect();
    let recent = recent_activities(records, RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(ActivityVm::from)
        .collect();
    DashboardVm { stats, recent }
}
