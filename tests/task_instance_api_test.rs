use airflow_client::model::{ListTaskInstanceForm, TaskState, XCom};
use airflow_client::{
    ApiClient, Collection, LogOptions, Pagination, TaskInstanceFilter, TaskInstanceKey,
    UpdateMask,
};
use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::builder(server.url("/api/v1"))
        .basic_auth("admin", "admin")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_task_instances_with_repeated_state() -> Result<()> {
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances")
                .query_param("state", "running")
                .query_param("state", "queued")
                .query_param("duration_gte", "1.5");
            then.status(200).json_body(json!({
                "task_instances": [{
                    "task_id": "extract",
                    "dag_id": "nightly_report",
                    "state": "running",
                    "duration": 12.25,
                    "try_number": 1,
                    "pool": "default_pool"
                }],
                "total_entries": 1
            }));
        })
        .await;

    let filter = TaskInstanceFilter {
        state: vec![TaskState::Running, TaskState::Queued],
        duration_gte: Some(1.5),
        ..TaskInstanceFilter::default()
    };
    let instances = client(&server)
        .task_instances()
        .get_task_instances("nightly_report", "manual_1", &filter)
        .await?;

    list_mock.assert_async().await;
    let ti = &instances.items()[0];
    assert_eq!(ti.state, Some(TaskState::Running));
    assert_eq!(ti.duration, Some(12.25));
    Ok(())
}

#[tokio::test]
async fn test_task_instance_none_state() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances/load");
            then.status(200)
                .json_body(json!({"task_id": "load", "state": "none"}));
        })
        .await;

    let ti = client(&server)
        .task_instances()
        .get_task_instance("nightly_report", "manual_1", "load")
        .await?;

    assert_eq!(ti.state, Some(TaskState::NoStatus));
    Ok(())
}

#[tokio::test]
async fn test_get_task_instances_batch() -> Result<()> {
    let server = MockServer::start_async().await;
    let batch_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/dags/~/dagRuns/~/taskInstances/list")
                .json_body(json!({"dag_ids": ["nightly_report"], "state": ["failed"]}));
            then.status(200).json_body(json!({
                "task_instances": [{"task_id": "load", "state": "failed"}],
                "total_entries": 1
            }));
        })
        .await;

    let form = ListTaskInstanceForm {
        dag_ids: Some(vec!["nightly_report".to_string()]),
        state: Some(vec![TaskState::Failed]),
        ..ListTaskInstanceForm::default()
    };
    let instances = client(&server)
        .task_instances()
        .get_task_instances_batch(&form)
        .await?;

    batch_mock.assert_async().await;
    assert_eq!(instances.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_get_log_with_continuation_token() -> Result<()> {
    let server = MockServer::start_async().await;
    let log_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances/extract/logs/2")
                .query_param("full_content", "false")
                .query_param("token", "abc");
            then.status(200).json_body(json!({
                "continuation_token": "def",
                "content": "[2021-01-01 00:00:01] INFO - Task started\n"
            }));
        })
        .await;

    let options = LogOptions {
        full_content: Some(false),
        token: Some("abc".to_string()),
    };
    let log = client(&server)
        .task_instances()
        .get_log("nightly_report", "manual_1", "extract", 2, &options)
        .await?;

    log_mock.assert_async().await;
    assert_eq!(log.continuation_token.as_deref(), Some("def"));
    assert!(log.content.unwrap_or_default().contains("Task started"));
    Ok(())
}

#[tokio::test]
async fn test_xcom_entries_and_single_entry() -> Result<()> {
    let server = MockServer::start_async().await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances/extract/xcomEntries")
                .query_param("limit", "5");
            then.status(200).json_body(json!({
                "xcom_entries": [{"key": "return_value", "task_id": "extract"}],
                "total_entries": 1
            }));
        })
        .await;
    let entry_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(
                "/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances/extract/xcomEntries/return_value",
            );
            then.status(200).json_body(json!({
                "key": "return_value",
                "task_id": "extract",
                "dag_id": "nightly_report",
                "value": "42"
            }));
        })
        .await;

    let api = client(&server).xcom();
    let task = TaskInstanceKey::new("nightly_report", "manual_1", "extract");
    let entries = api
        .get_xcom_entries(task, Pagination::new(Some(5), None))
        .await?;
    let entry = api.get_xcom_entry(task, "return_value").await?;

    list_mock.assert_async().await;
    entry_mock.assert_async().await;
    assert_eq!(entries.items()[0].key.as_deref(), Some("return_value"));
    assert_eq!(entry.item.dag_id.as_deref(), Some("nightly_report"));
    assert_eq!(entry.value.as_deref(), Some("42"));
    Ok(())
}

#[tokio::test]
async fn test_xcom_write_operations() -> Result<()> {
    let server = MockServer::start_async().await;
    let base = "/api/v1/dags/nightly_report/dagRuns/manual_1/taskInstances/extract/xcomEntries";
    let post_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(base)
                .json_body(json!({"key": "rows", "value": "10"}));
            then.status(200)
                .json_body(json!({"key": "rows", "value": "10"}));
        })
        .await;
    let patch_mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path(format!("{}/rows", base))
                .query_param("update_mask", "value")
                .json_body(json!({"value": "11"}));
            then.status(200)
                .json_body(json!({"key": "rows", "value": "11"}));
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path(format!("{}/rows", base));
            then.status(204);
        })
        .await;

    let api = client(&server).xcom();
    let task = TaskInstanceKey::new("nightly_report", "manual_1", "extract");
    api.post_xcom_entries(task, &XCom::new("rows", "10")).await?;
    let update = XCom {
        value: Some("11".to_string()),
        ..XCom::default()
    };
    let patched = api
        .patch_xcom_entry(task, "rows", &update, &UpdateMask::new(["value"]))
        .await?;
    api.delete_xcom_entry(task, "rows").await?;

    post_mock.assert_async().await;
    patch_mock.assert_async().await;
    delete_mock.assert_async().await;
    assert_eq!(patched.value.as_deref(), Some("11"));
    Ok(())
}

#[tokio::test]
async fn test_blank_task_id_is_rejected_for_xcom() {
    let server = MockServer::start_async().await;
    let task = TaskInstanceKey::new("nightly_report", "manual_1", "");
    let err = client(&server)
        .xcom()
        .get_xcom_entry(task, "rows")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("task_id"));
}
