//! Pretty output formatting.

use logit_core::log::LogEntry;

/// Format a log entry for display.
pub fn format_log(log: &LogEntry) -> String {
    let objective = if log.objective.is_empty() {
        "(none)"
    } else {
        log.objective.as_str()
    };
    let contractor = if log.contractor_type.is_empty() {
        "-"
    } else {
        log.contractor_type.as_str()
    };
    format!(
        "#{} Section {} [{}]\n  Objective: {}",
        log.id, log.section_number, contractor, objective
    )
}

/// Format log entries for display.
pub fn format_logs(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return "No logs found.".to_string();
    }
    let mut output = format!("LOGS ({})\n", logs.len());
    output.push_str(&"-".repeat(40));
    for log in logs {
        output.push_str(&format!("\n{}", format_log(log)));
        output.push('\n');
    }
    output
}
