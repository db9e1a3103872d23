#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn summary_json(id: &str, name: &str, period: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_by_full_name": name,
        "period": period,
        "status": "submitted",
        "total_hours": 40.0,
        "submitted_at": "2025-01-13T08:30:00Z"
    })
}

fn detail_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_by_full_name": "Jane Doe",
        "period": "2025-01-06 - 2025-01-12",
        "status": "submitted",
        "entries": [
            { "date": "2025-01-06", "project": "Apollo", "task": "Review", "hours": 8.0, "notes": null },
            { "date": "2025-01-07", "project": "Apollo", "task": "Build", "hours": "7.5", "notes": "late start" }
        ]
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn list_approvals_preserves_server_order() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/approvals/");
        then.status(200).json_body(json!([
            summary_json("3", "Charlie", "Week 3"),
            summary_json("1", "Alice", "Week 1"),
            summary_json("2", "Bob", "Week 2")
        ]));
    });

    let approvals = api_client(&server).list_approvals().await.unwrap();
    let ids: Vec<&str> = approvals.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(approvals[1].created_by_full_name, "Alice");
    assert_eq!(server.hits(GET, "/api/approvals/"), 1);
}

#[tokio::test]
async fn list_approvals_surfaces_error_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/approvals/");
        then.status(403)
            .json_body(json!({ "error": "Forbidden", "code": "FORBIDDEN" }));
    });

    let err = api_client(&server).list_approvals().await.unwrap_err();
    assert_eq!(err.error, "Forbidden");
    assert_eq!(err.code, "FORBIDDEN");
}

#[tokio::test]
async fn list_approvals_falls_back_to_status_for_foreign_error_shape() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/approvals/");
        then.status(500).json_body(json!({ "message": "database down" }));
    });

    let err = api_client(&server).list_approvals().await.unwrap_err();
    assert_eq!(err.error, "Request failed: 500: database down");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn approve_and_reject_accept_any_success_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/timesheets/7/approve/");
        then.status(200).json_body(json!({ "status": "approved" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/timesheets/8/reject/");
        then.status(204);
    });

    let api = api_client(&server);
    api.approve_timesheet(&TimesheetId::from("7")).await.unwrap();
    api.reject_timesheet(&TimesheetId::from("8"), "Missing Friday")
        .await
        .unwrap();

    let reject = server
        .received()
        .into_iter()
        .find(|request| request.path == "/api/timesheets/8/reject/")
        .expect("reject request recorded");
    assert_eq!(
        reject.body,
        Some(json!({ "rejection_reason": "Missing Friday" }))
    );
    assert!(reject.authorization.is_none());
}

#[tokio::test]
async fn approve_non_success_reports_status_and_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/timesheets/7/approve/");
        then.status(409)
            .json_body(json!({ "message": "Timesheet already approved" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/timesheets/9/reject/");
        then.status(500).json_body(json!({}));
    });

    let api = api_client(&server);
    let approve_err = api
        .approve_timesheet(&TimesheetId::from("7"))
        .await
        .unwrap_err();
    assert_eq!(
        approve_err.error,
        "Approval failed: 409: Timesheet already approved"
    );

    let reject_err = api
        .reject_timesheet(&TimesheetId::from("9"), "nope")
        .await
        .unwrap_err();
    assert_eq!(reject_err.error, "Rejection failed: 500: Unknown error");
    assert_eq!(reject_err.code, "HTTP_ERROR");
}

#[tokio::test]
async fn get_timesheet_parses_detail_record() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/timesheets/ts-5/");
        then.status(200).json_body(detail_json("ts-5"));
    });

    let detail = api_client(&server)
        .get_timesheet(&TimesheetId::from("ts-5"))
        .await
        .unwrap();
    assert_eq!(detail.id.as_str(), "ts-5");
    assert_eq!(detail.entries.len(), 2);
    assert_eq!(detail.entries[1].hours, 7.5);
    assert_eq!(detail.effective_total_hours(), 15.5);
}

#[tokio::test]
async fn unmatched_route_is_a_request_failure() {
    let server = MockServer::start_async().await;

    let err = api_client(&server)
        .get_timesheet(&TimesheetId::from("missing"))
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn base_url_trailing_slash_is_ignored() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/approvals/");
        then.status(200).json_body(json!([]));
    });

    let api = ApiClient::new_with_base_url(format!("{}/", server.url("/api")));
    let approvals = api.list_approvals().await.unwrap();
    assert!(approvals.is_empty());
}
