use std::collections::BTreeSet;

use super::utils::{
    ACTION_FAILURE_MESSAGE, APPROVE_SUCCESS_MESSAGE, LOAD_ERROR_MESSAGE, REJECT_SUCCESS_MESSAGE,
};
use crate::api::{TimesheetDetail, TimesheetId, TimesheetSummary};
use crate::components::snackbar::{Notification, Severity};

/// Everything the approvals page shows, owned by a single signal.
///
/// Every user-visible change goes through one of the transition methods so
/// that related fields (dialog flag and its content, in-flight marks and
/// their outcome) always move together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalsState {
    pub approvals: Vec<TimesheetSummary>,
    pub load_error: Option<String>,
    pub reject_target: Option<TimesheetSummary>,
    pub reject_dialog_open: bool,
    pub viewed: Option<TimesheetDetail>,
    pub notification: Notification,
    pub refresh: bool,
    pub in_flight: BTreeSet<TimesheetId>,
}

impl ApprovalsState {
    pub fn load_succeeded(&mut self, approvals: Vec<TimesheetSummary>) {
        self.approvals = approvals;
        self.load_error = None;
    }

    pub fn load_failed(&mut self) {
        self.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
    }

    /// Marks `id` as having a request outstanding. Returns `false` when one
    /// already is, in which case the caller must not send another.
    pub fn begin_action(&mut self, id: &TimesheetId) -> bool {
        self.in_flight.insert(id.clone())
    }

    pub fn is_in_flight(&self, id: &TimesheetId) -> bool {
        self.in_flight.contains(id)
    }

    pub fn approve_finished(&mut self, id: &TimesheetId, succeeded: bool) {
        self.in_flight.remove(id);
        if succeeded {
            self.notification
                .show(Severity::Success, APPROVE_SUCCESS_MESSAGE);
            self.request_refresh();
        } else {
            self.notification.show(Severity::Error, ACTION_FAILURE_MESSAGE);
        }
    }

    pub fn open_reject_dialog(&mut self, timesheet: TimesheetSummary) {
        self.reject_target = Some(timesheet);
        self.reject_dialog_open = true;
    }

    pub fn close_reject_dialog(&mut self) {
        self.reject_dialog_open = false;
    }

    /// On failure the dialog stays open so the reason can be resubmitted.
    pub fn reject_finished(&mut self, id: &TimesheetId, succeeded: bool) {
        self.in_flight.remove(id);
        if succeeded {
            self.notification.show(Severity::Success, REJECT_SUCCESS_MESSAGE);
            self.request_refresh();
            self.reject_dialog_open = false;
        } else {
            self.notification.show(Severity::Error, ACTION_FAILURE_MESSAGE);
        }
    }

    pub fn reject_invalid(&mut self, message: impl Into<String>) {
        self.notification.show(Severity::Error, message);
    }

    pub fn view_loaded(&mut self, detail: TimesheetDetail) {
        self.viewed = Some(detail);
    }

    pub fn close_view(&mut self) {
        self.viewed = None;
    }

    pub fn is_view_open(&self) -> bool {
        self.viewed.is_some()
    }

    pub fn close_notification(&mut self) {
        self.notification.hide();
    }

    pub fn expire_notification(&mut self, serial: u32) {
        self.notification.expire(serial);
    }

    fn request_refresh(&mut self) {
        self.refresh = !self.refresh;
    }
}
