use crate::api::{ApiError, TimesheetDetail, TimesheetSummary};
use chrono::{DateTime, Utc};

pub const APPROVE_SUCCESS_MESSAGE: &str = "Timesheet approved successfully!";
pub const REJECT_SUCCESS_MESSAGE: &str = "Timesheet rejected successfully!";
// Shown for both approve and reject failures.
pub const ACTION_FAILURE_MESSAGE: &str = "Failed to approve timesheet.";
pub const LOAD_ERROR_MESSAGE: &str = "Error fetching approvals";
pub const REJECT_DIALOG_CONTENT: &str = "Please enter your reason for rejecting this timesheet.";

pub fn reject_dialog_title(target: Option<&TimesheetSummary>) -> String {
    let (name, period) = target
        .map(|t| (t.created_by_full_name.as_str(), t.period.as_str()))
        .unwrap_or(("", ""));
    format!("Reject Timesheet: {} - {}", name, period)
}

pub fn view_dialog_title(detail: &TimesheetDetail) -> String {
    format!(
        "Timesheet for {} - {}",
        detail.created_by_full_name, detail.period
    )
}

pub fn validate_rejection_reason(reason: &str) -> Result<String, ApiError> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation("A rejection reason is required."))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn format_hours(hours: Option<f64>) -> String {
    hours
        .map(|h| format!("{:.2}", h))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_submitted_at(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
