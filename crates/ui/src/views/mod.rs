mod achievements;
mod add_progress;
mod dashboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use achievements::AchievementsView;
pub use add_progress::AddProgressView;
pub use dashboard::DashboardView;
pub use state::{ViewError, ViewState, load_state_from_resource, view_state_from_resource};
