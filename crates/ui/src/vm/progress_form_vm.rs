use progress_core::model::{ProgressDraft, ProgressError, ProgressStatus, ProgressTemplate};
use services::ProgressServiceError;

/// Raw field values of the new-entry form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressFormVm {
    pub topic: String,
    pub description: String,
    pub status: String,
    pub template: String,
}

impl Default for ProgressFormVm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            description: String::new(),
            status: ProgressStatus::CHOICES[0].to_owned(),
            template: ProgressTemplate::CHOICES[0].to_owned(),
        }
    }
}

impl ProgressFormVm {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.topic.trim().is_empty()
    }

    #[must_use]
    pub fn to_draft(&self) -> ProgressDraft {
        ProgressDraft::new(
            self.topic.clone(),
            ProgressStatus::from_label(&self.status),
            ProgressTemplate::from_label(&self.template),
        )
        .with_description(self.description.clone())
    }
}

#[must_use]
pub fn form_error_message(err: &ProgressServiceError) -> &'static str {
    match err {
        ProgressServiceError::Validation(ProgressError::EmptyTopic) => "Please enter a topic.",
        ProgressServiceError::Validation(_) => "Please check the entry and try again.",
        _ => "Failed to save progress. Please try again later.",
    }
}
