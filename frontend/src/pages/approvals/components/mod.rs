pub mod approvals_table;
pub mod reject_dialog;
pub mod timesheet_view;
