use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, RejectTimesheetRequest, TimesheetDetail, TimesheetId, TimesheetSummary},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn timesheet_url(base_url: &str, id: &TimesheetId, action: Option<&str>) -> String {
    let id = utf8_percent_encode(id.as_str(), PATH_SEGMENT);
    match action {
        Some(action) => format!("{}/timesheets/{}/{}/", base_url, id, action),
        None => format!("{}/timesheets/{}/", base_url, id),
    }
}

impl ApiClient {
    pub async fn list_approvals(&self) -> Result<Vec<TimesheetSummary>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/approvals/", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn approve_timesheet(&self, id: &TimesheetId) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(timesheet_url(&base_url, id, Some("approve"))),
            )
            .await?;
        self.expect_success(response, "Approval failed").await
    }

    pub async fn reject_timesheet(&self, id: &TimesheetId, reason: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(timesheet_url(&base_url, id, Some("reject")))
                    .json(&RejectTimesheetRequest {
                        rejection_reason: reason.to_string(),
                    }),
            )
            .await?;
        self.expect_success(response, "Rejection failed").await
    }

    pub async fn get_timesheet(&self, id: &TimesheetId) -> Result<TimesheetDetail, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(timesheet_url(&base_url, id, None)))
            .await?;
        self.map_json_response(response).await
    }
}
