use progress_core::model::{ProgressRecord, StatusTone};
use progress_core::summary::newest_first;

use crate::vm::time_fmt::format_date;

/// One entry of an activity feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub id: String,
    pub topic: String,
    pub description: String,
    pub status_label: String,
    pub badge_class: &'static str,
    pub template_label: String,
    pub date_str: String,
}

impl From<&ProgressRecord> for ActivityVm {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            id: record.id().to_string(),
            topic: record.topic().to_owned(),
            description: record.description().to_owned(),
            status_label: record.status().as_str().to_owned(),
            badge_class: badge_class(record.status().tone()),
            template_label: record.template().as_str().to_owned(),
            date_str: record.timestamp().map(format_date).unwrap_or_default(),
        }
    }
}

#[must_use]
pub const fn badge_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Green => "status-badge status-badge--green",
        StatusTone::Blue => "status-badge status-badge--blue",
        StatusTone::Yellow => "status-badge status-badge--yellow",
        StatusTone::Purple => "status-badge status-badge--purple",
    }
}

/// Every record as a feed entry, newest first.
#[must_use]
pub fn map_achievements(records: &[ProgressRecord]) -> Vec<ActivityVm> {
    newest_first(records).into_iter().map(ActivityVm::from).collect()
}
