mod requests;
mod responses;
mod types;

pub use requests::ListLogsQuery;
pub use responses::{DeleteConfirmation, ErrorDetail, WelcomeMessage};
pub use types::{LogEntry, NewLogEntry, LOG_ENTITY};
