mod ids;
mod labels;
mod progress;

pub use ids::ProgressId;
pub use labels::{ProgressStatus, ProgressTemplate, StatusTone};
pub use progress::{ProgressDraft, ProgressError, ProgressRecord};
