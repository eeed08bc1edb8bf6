//! Aggregate counts and recent-activity selection over a loaded record list.
//!
//! Everything here is pure: deriving twice from the same slice yields the same
//! output.

use crate::model::{ProgressRecord, ProgressStatus, ProgressTemplate};

/// Number of entries shown in the recent-activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// One row of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Total,
    Completed,
    InProgress,
    Projects,
    Certifications,
    Challenges,
    Workshops,
}

impl StatKind {
    /// Display order.
    pub const ALL: [StatKind; 7] = [
        StatKind::Total,
        StatKind::Completed,
        StatKind::InProgress,
        StatKind::Projects,
        StatKind::Certifications,
        StatKind::Challenges,
        StatKind::Workshops,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Total => "Total Entries",
            StatKind::Completed => "Completed",
            StatKind::InProgress => "In Progress",
            StatKind::Projects => "Projects",
            StatKind::Certifications => "Certifications",
            StatKind::Challenges => "Challenges",
            StatKind::Workshops => "Workshops",
        }
    }

    /// Whether a record counts toward this row.
    ///
    /// Status rows and template rows are independent, so one record may count
    /// toward one of each.
    #[must_use]
    pub fn matches(self, record: &ProgressRecord) -> bool {
        match self {
            StatKind::Total => true,
            StatKind::Completed => *record.status() == ProgressStatus::Completed,
            StatKind::InProgress => *record.status() == ProgressStatus::InProgress,
            StatKind::Projects => *record.template() == ProgressTemplate::CompletedProject,
            StatKind::Certifications => *record.template() == ProgressTemplate::Certification,
            StatKind::Challenges => *record.template() == ProgressTemplate::Challenge,
            StatKind::Workshops => *record.template() == ProgressTemplate::Workshop,
        }
    }

    #[must_use]
    pub fn count(self, records: &[ProgressRecord]) -> usize {
        records.iter().filter(|record| self.matches(record)).count()
    }
}

/// Category counts over a record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub projects: usize,
    pub certifications: usize,
    pub challenges: usize,
    pub workshops: usize,
}

impl ProgressStats {
    #[must_use]
    pub fn from_records(records: &[ProgressRecord]) -> Self {
        let mut stats = Self::default();
        for kind in StatKind::ALL {
            *stats.slot_mut(kind) = kind.count(records);
        }
        stats
    }

    #[must_use]
    pub fn get(&self, kind: StatKind) -> usize {
        match kind {
            StatKind::Total => self.total,
            StatKind::Completed => self.completed,
            StatKind::InProgress => self.in_progress,
            StatKind::Projects => self.projects,
            StatKind::Certifications => self.certifications,
            StatKind::Challenges => self.challenges,
            StatKind::Workshops => self.workshops,
        }
    }

    /// `(kind, count)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (StatKind, usize)> + '_ {
        StatKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    fn slot_mut(&mut self, kind: StatKind) -> &mut usize {
        match kind {
            StatKind::Total => &mut self.total,
            StatKind::Completed => &mut self.completed,
            StatKind::InProgress => &mut self.in_progress,
            StatKind::Projects => &mut self.projects,
            StatKind::Certifications => &mut self.certifications,
            StatKind::Challenges => &mut self.challenges,
            StatKind::Workshops => &mut self.workshops,
        }
    }
}

/// All records ordered newest first.
///
/// The sort is stable: records with equal timestamps keep their input order.
/// Records without a readable timestamp sort last.
#[must_use]
pub fn newest_first(records: &[ProgressRecord]) -> Vec<&ProgressRecord> {
    let mut sorted: Vec<&ProgressRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    sorted
}

/// The `limit` most recent records, newest first.
#[must_use]
pub fn recent_activities(records: &[ProgressRecord], limit: usize) -> Vec<&ProgressRecord> {
    let mut sorted = newest_first(records);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProgressId;
    use crate::time::parse_timestamp;

    fn record(id: &str, status: &str, template: &str, timestamp: &str) -> ProgressRecord {
        ProgressRecord::from_persisted(
            ProgressId::new(id),
            format!("Topic {id}"),
            "",
            ProgressStatus::from_label(status),
            ProgressTemplate::from_label(template),
            parse_timestamp(timestamp),
        )
    }

    #[test]
    fn empty_list_yields_zero_counts_and_no_activity() {
        let stats = ProgressStats::from_records(&[]);
        assert_eq!(stats, ProgressStats::default());
        assert!(stats.entries().all(|(_, count)| count == 0));
        assert!(recent_activities(&[], RECENT_ACTIVITY_LIMIT).is_empty());
    }

    #[test]
    fn two_record_scenario() {
        let records = vec![
            record("1", "Completed", "Certification/Qualification", "2024-01-01"),
            record("2", "In Progress", "Completed Project/Task", "2024-06-01"),
        ];

        let stats = ProgressStats::from_records(&records);
        assert_eq!(
            stats,
            ProgressStats {
                total: 2,
                completed: 1,
                in_progress: 1,
                projects: 1,
                certifications: 1,
                challenges: 0,
                workshops: 0,
            }
        );

        let recent: Vec<_> = recent_activities(&records, RECENT_ACTIVITY_LIMIT)
            .iter()
            .map(|r| r.id().as_str().to_owned())
            .collect();
        assert_eq!(recent, vec!["2", "1"]);
    }

    #[test]
    fn unknown_labels_only_count_toward_total() {
        let records = vec![
            record("1", "On Hold", "Reading", "2024-01-01"),
            record("2", "Planned", "Workshops/Bootcamps", "2024-01-02"),
        ];
        let stats = ProgressStats::from_records(&records);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed + stats.in_progress, 0);
        assert_eq!(stats.workshops, 1);
        assert_eq!(stats.projects + stats.certifications + stats.challenges, 0);
    }

    #[test]
    fn counts_are_bounded_by_total() {
        let statuses = ["Completed", "In Progress", "On Hold", "Planned"];
        let templates = [
            "Completed Project/Task",
            "Certification/Qualification",
            "Challenges/Competitions",
            "Workshops/Bootcamps",
            "Other",
        ];
        let records: Vec<_> = (0..20)
            .map(|i| {
                record(
                    &i.to_string(),
                    statuses[i % statuses.len()],
                    templates[i % templates.len()],
                    "2024-01-01",
                )
            })
            .collect();

        let stats = ProgressStats::from_records(&records);
        assert_eq!(stats.total, 20);
        assert!(stats.completed + stats.in_progress <= stats.total);
        for (_, count) in stats.entries() {
            assert!(count <= stats.total);
        }
    }

    #[test]
    fn recent_is_capped_sorted_and_stable() {
        let records = vec![
            record("a", "Completed", "Other", "2024-03-01"),
            record("b", "Completed", "Other", "2024-05-01"),
            record("c", "Completed", "Other", "2024-05-01"),
            record("d", "Completed", "Other", "2024-01-01"),
            record("e", "Completed", "Other", "2024-07-01"),
            record("f", "Completed", "Other", "2024-02-01"),
            record("g", "Completed", "Other", "2023-12-31"),
        ];

        let recent = recent_activities(&records, RECENT_ACTIVITY_LIMIT);
        assert_eq!(recent.len(), 5);
        for pair in recent.windows(2) {
            assert!(pair[0].timestamp() >= pair[1].timestamp());
        }
        let ids: Vec<_> = recent.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["e", "b", "c", "a", "f"]);
    }

    #[test]
    fn unreadable_timestamps_sort_last_in_input_order() {
        let records = vec![
            record("x", "Completed", "Other", "not a date"),
            record("a", "Completed", "Other", "2024-03-01"),
            record("y", "Completed", "Other", ""),
            record("b", "Completed", "Other", "2024-05-01"),
        ];

        let ids: Vec<_> = newest_first(&records)
            .iter()
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "x", "y"]);
        assert_eq!(ProgressStats::from_records(&records).total, 4);
    }

    #[test]
    fn short_lists_return_everything() {
        let records = vec![
            record("1", "Completed", "Other", "2024-01-01"),
            record("2", "Completed", "Other", "2024-01-02"),
        ];
        assert_eq!(recent_activities(&records, RECENT_ACTIVITY_LIMIT).len(), 2);
    }

    #[test]
    fn derivation_is_idempotent() {
        let records = vec![
            record("1", "Completed", "Workshops/Bootcamps", "2024-01-01"),
            record("2", "In Progress", "Challenges/Competitions", "2024-02-01"),
        ];
        assert_eq!(
            ProgressStats::from_records(&records),
            ProgressStats::from_records(&records)
        );
        assert_eq!(
            recent_activities(&records, RECENT_ACTIVITY_LIMIT),
            recent_activities(&records, RECENT_ACTIVITY_LIMIT)
        );
    }
}
