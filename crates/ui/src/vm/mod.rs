mod activity_vm;
mod dashboard_vm;
mod load_state;
mod progress_form_vm;
mod time_fmt;

pub use activity_vm::{ActivityVm, badge_class, map_achievements};
pub use dashboard_vm::{DashboardVm, StatCardVm, map_dashboard};
pub use load_state::{LOAD_FAILURE_MESSAGE, LoadState, banner_message};
pub use progress_form_vm::{ProgressFormVm, form_error_message};
pub use time_fmt::format_date;
