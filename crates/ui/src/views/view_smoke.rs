use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use progress_core::model::{ProgressId, ProgressRecord, ProgressStatus, ProgressTemplate};
use progress_core::time::parse_timestamp;
use storage::repository::{InMemoryRepository, ProgressRepository, StorageError};

use super::test_harness::{ViewKind, setup_view_harness};

fn record(id: &str, topic: &str, status: &str, template: &str, timestamp: &str) -> ProgressRecord {
    ProgressRecord::from_persisted(
        ProgressId::new(id),
        topic,
        format!("Notes on {topic}"),
        ProgressStatus::from_label(status),
        ProgressTemplate::from_label(template),
        parse_timestamp(timestamp).expect("timestamp"),
    )
}

struct FailingRepo;

#[async_trait::async_trait]
impl ProgressRepository for FailingRepo {
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_progress(&self, _id: &ProgressId) -> Result<ProgressRecord, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn insert_progress(&self, _record: &ProgressRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

/// Counts list fetches before delegating to the wrapped repository.
struct CountingRepo {
    inner: Arc<dyn ProgressRepository>,
    lists: Arc<AtomicUsize>,
}

impl CountingRepo {
    fn wrap(inner: Arc<dyn ProgressRepository>) -> (Self, Arc<AtomicUsize>) {
        let lists = Arc::new(AtomicUsize::new(0));
        let repo = Self {
            inner,
            lists: Arc::clone(&lists),
        };
        (repo, lists)
    }
}

#[async_trait::async_trait]
impl ProgressRepository for CountingRepo {
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list_progress().await
    }

    async fn get_progress(&self, id: &ProgressId) -> Result<ProgressRecord, StorageError> {
        self.inner.get_progress(id).await
    }

    async fn insert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        self.inner.insert_progress(record).await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_stats_and_recent_feed() {
    let repo = InMemoryRepository::with_records(vec![
        record("1", "AWS Certified", "Completed", "Certification/Qualification", "2024-01-01"),
        record("2", "Portfolio Rebuild", "In Progress", "Completed Project/Task", "2024-06-01"),
    ]);
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(repo));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Learning Progress Dashboard"), "missing title in {html}");
    assert!(html.contains("Total Entries"), "missing total card in {html}");
    assert!(html.contains("status-badge--green"), "missing green badge in {html}");
    assert!(html.contains("status-badge--blue"), "missing blue badge in {html}");
    assert!(html.contains("View All"), "missing achievements link in {html}");
    assert!(html.contains("Add New Progress"), "missing add link in {html}");

    let newer = html.find("Portfolio Rebuild").expect("newer entry");
    let older = html.find("AWS Certified").expect("older entry");
    assert!(newer < older, "recent feed not sorted newest first: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_caps_recent_feed_at_five() {
    let records = (1..=7)
        .map(|day| {
            record(
                &day.to_string(),
                &format!("Entry {day}"),
                "Completed",
                "Workshops/Bootcamps",
                &format!("2024-03-0{day}"),
            )
        })
        .collect();
    let mut harness = setup_view_harness(
        ViewKind::Dashboard,
        Arc::new(InMemoryRepository::with_records(records)),
    );
    harness.settle().await;

    let html = harness.render();
    assert_eq!(html.matches("class=\"activity\"").count(), 5, "{html}");
    assert!(html.contains("Entry 7"));
    assert!(!html.contains("Entry 2"));
    assert!(!html.contains("Entry 1"));
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(InMemoryRepository::new()));
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No activities found. Start by adding your progress!"),
        "missing empty message in {html}"
    );
    assert!(!html.contains("Failed to load"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_loading_before_fetch_settles() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(InMemoryRepository::new()));
    harness.dom.rebuild_in_place();

    let html = harness.render();
    assert!(html.contains("Loading your progress data..."), "missing spinner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_error_banner() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(FailingRepo));
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load progress data. Please try again later."),
        "missing error in {html}"
    );
    assert!(html.contains("alert-dismiss"), "missing dismiss control in {html}");
    assert!(
        html.contains("No activities found."),
        "dashboard body should still render in {html}"
    );
    assert!(!html.contains("Loading your progress data"), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_fetches_once_per_mount() {
    let inner = InMemoryRepository::with_records(vec![record(
        "1",
        "Rust Workshop",
        "Completed",
        "Workshops/Bootcamps",
        "2024-02-01",
    )]);
    let (repo, lists) = CountingRepo::wrap(Arc::new(inner));
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(repo));
    harness.settle().await;
    for _ in 0..3 {
        harness.drive_async().await;
    }

    assert!(harness.render().contains("Rust Workshop"));
    assert_eq!(lists.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn dismissing_error_banner_hides_it_without_refetching() {
    let (repo, lists) = CountingRepo::wrap(Arc::new(FailingRepo));
    let mut harness = setup_view_harness(ViewKind::Dashboard, Arc::new(repo));
    harness.settle().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("alert-dismiss"), "missing banner in {html}");
    assert_eq!(lists.load(Ordering::SeqCst), 1);

    harness.dismiss_banner();
    for _ in 0..2 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(!html.contains("alert-dismiss"), "banner still shown in {html}");
    assert!(!html.contains("Failed to load progress data"), "{html}");
    assert!(html.contains("No activities found."), "body missing in {html}");
    assert_eq!(lists.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn achievements_smoke_lists_all_records() {
    let records = (1..=7)
        .map(|day| {
            record(
                &day.to_string(),
                &format!("Entry {day}"),
                "On Hold",
                "Challenges/Competitions",
                &format!("2024-03-0{day}"),
            )
        })
        .collect();
    let mut harness = setup_view_harness(
        ViewKind::Achievements,
        Arc::new(InMemoryRepository::with_records(records)),
    );
    harness.settle().await;

    let html = harness.render();
    assert_eq!(html.matches("class=\"activity\"").count(), 7, "{html}");
    assert!(html.contains("status-badge--yellow"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn achievements_smoke_offers_retry_on_error() {
    let mut harness = setup_view_harness(ViewKind::Achievements, Arc::new(FailingRepo));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to load progress data"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_progress_smoke_renders_form_choices() {
    let mut harness =
        setup_view_harness(ViewKind::AddProgress, Arc::new(InMemoryRepository::new()));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Add New Progress"), "missing title in {html}");
    assert!(html.contains("Certification/Qualification"), "missing template in {html}");
    assert!(html.contains("On Hold"), "missing status in {html}");
    assert!(html.contains("Save Progress"), "missing save button in {html}");
}
