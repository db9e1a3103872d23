use crate::api::{ApiClient, ApiError, TimesheetDetail, TimesheetId, TimesheetSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApprovalsRepository {
    client: Rc<ApiClient>,
}

impl Default for ApprovalsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ApprovalsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_approvals(&self) -> Result<Vec<TimesheetSummary>, ApiError> {
        self.client.list_approvals().await
    }

    pub async fn approve(&self, id: &TimesheetId) -> Result<(), ApiError> {
        self.client.approve_timesheet(id).await
    }

    pub async fn reject(&self, id: &TimesheetId, reason: &str) -> Result<(), ApiError> {
        self.client.reject_timesheet(id, reason).await
    }

    pub async fn fetch_timesheet(&self, id: &TimesheetId) -> Result<TimesheetDetail, ApiError> {
        self.client.get_timesheet(id).await
    }
}
