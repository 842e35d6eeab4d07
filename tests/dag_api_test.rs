use airflow_client::model::{
    ClearTaskInstance, CronExpression, Dag, ScheduleInterval, Tag, TimeDelta,
};
use airflow_client::{fetch_all, ApiClient, Collection, Pagination, UpdateMask};
use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::builder(server.url("/api/v1"))
        .bearer_token("secret-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_dags_with_bearer_token() -> Result<()> {
    let server = MockServer::start_async().await;
    let dags_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags")
                .header("authorization", "Bearer secret-token");
            then.status(200).json_body(json!({
                "dags": [{
                    "dag_id": "example_bash_operator",
                    "is_paused": false,
                    "owners": ["airflow"],
                    "file_token": "Ii9maWxlcy9kYWdzL2V4YW1wbGUucHki",
                    "schedule_interval": {"__type": "CronExpression", "value": "0 0 * * *"},
                    "tags": [{"name": "example"}]
                }],
                "total_entries": 1
            }));
        })
        .await;

    let dags = client(&server).dags().get_dags(Pagination::default()).await?;

    dags_mock.assert_async().await;
    let dag = &dags.items()[0];
    assert_eq!(dag.dag_id.as_deref(), Some("example_bash_operator"));
    assert_eq!(
        dag.schedule_interval,
        Some(ScheduleInterval::CronExpression(CronExpression::new(
            "0 0 * * *"
        )))
    );
    Ok(())
}

#[tokio::test]
async fn test_get_dag_by_id() -> Result<()> {
    let server = MockServer::start_async().await;
    let get_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags/nightly_report")
                .header("authorization", "Bearer secret-token");
            then.status(200).json_body(json!({
                "dag_id": "nightly_report",
                "is_paused": false,
                "fileloc": "/files/dags/nightly_report.py",
                "tags": [{"name": "finance"}]
            }));
        })
        .await;

    let dag = client(&server).dags().get_dag("nightly_report").await?;

    get_mock.assert_async().await;
    assert_eq!(dag.dag_id.as_deref(), Some("nightly_report"));
    assert_eq!(dag.is_paused, Some(false));
    assert_eq!(dag.tags, Some(vec![Tag::new("finance")]));
    Ok(())
}

#[tokio::test]
async fn test_patch_dag_with_custom_mask() -> Result<()> {
    let server = MockServer::start_async().await;
    let patch_mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v1/dags/nightly_report")
                .query_param("update_mask", "is_paused,description")
                .json_body(json!({
                    "is_paused": false,
                    "description": "Daily finance report"
                }));
            then.status(200).json_body(json!({
                "dag_id": "nightly_report",
                "is_paused": false,
                "description": "Daily finance report"
            }));
        })
        .await;

    let mut update = Dag::paused(false);
    update.description = Some("Daily finance report".to_string());
    let dag = client(&server)
        .dags()
        .patch_dag(
            "nightly_report",
            &update,
            &UpdateMask::new(["is_paused", "description"]),
        )
        .await?;

    patch_mock.assert_async().await;
    assert_eq!(dag.description.as_deref(), Some("Daily finance report"));
    Ok(())
}

#[tokio::test]
async fn test_set_paused_patches_only_is_paused() -> Result<()> {
    let server = MockServer::start_async().await;
    let patch_mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/v1/dags/nightly_report")
                .query_param("update_mask", "is_paused")
                .json_body(json!({"is_paused": true}));
            then.status(200)
                .json_body(json!({"dag_id": "nightly_report", "is_paused": true}));
        })
        .await;

    let dag = client(&server)
        .dags()
        .set_paused("nightly_report", true)
        .await?;

    patch_mock.assert_async().await;
    assert_eq!(dag.is_paused, Some(true));
    Ok(())
}

#[tokio::test]
async fn test_get_dag_details_flattens_dag_fields() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/dags/nightly_report/details");
            then.status(200).json_body(json!({
                "dag_id": "nightly_report",
                "catchup": false,
                "timezone": "Timezone('UTC')",
                "start_date": "2021-01-01T00:00:00+00:00",
                "schedule_interval": {"__type": "TimeDelta", "days": 1, "seconds": 0, "microseconds": 0},
                "dag_run_timeout": {"__type": "TimeDelta", "days": 0, "seconds": 3600, "microseconds": 0}
            }));
        })
        .await;

    let detail = client(&server)
        .dags()
        .get_dag_details("nightly_report")
        .await?;

    assert_eq!(detail.dag.dag_id.as_deref(), Some("nightly_report"));
    assert_eq!(detail.catchup, Some(false));
    assert_eq!(
        detail.dag.schedule_interval,
        Some(ScheduleInterval::TimeDelta(TimeDelta::new(1, 0, 0)))
    );
    assert_eq!(detail.dag_run_timeout, Some(TimeDelta::new(0, 3600, 0)));
    Ok(())
}

#[tokio::test]
async fn test_get_tasks_and_single_task() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/dags/nightly_report/tasks");
            then.status(200).json_body(json!({
                "tasks": [
                    {"task_id": "extract", "trigger_rule": "all_success", "retries": 2},
                    {"task_id": "load", "downstream_task_ids": []}
                ],
                "total_entries": 2
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/dags/nightly_report/tasks/extract");
            then.status(200)
                .json_body(json!({"task_id": "extract", "retries": 2}));
        })
        .await;

    let api = client(&server).dags();
    let tasks = api.get_tasks("nightly_report").await?;
    let task = api.get_task("nightly_report", "extract").await?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(task.retries, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_clear_task_instances_dry_run() -> Result<()> {
    let server = MockServer::start_async().await;
    let clear_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/dags/nightly_report/clearTaskInstances")
                .json_body(json!({"dry_run": true, "only_failed": true}));
            then.status(200).json_body(json!({
                "task_instances": [{
                    "task_id": "extract",
                    "dag_id": "nightly_report",
                    "dag_run_id": "scheduled__2021-01-01T00:00:00+00:00"
                }]
            }));
        })
        .await;

    let request = ClearTaskInstance {
        dry_run: Some(true),
        only_failed: Some(true),
        ..ClearTaskInstance::default()
    };
    let cleared = client(&server)
        .dags()
        .post_clear_task_instances("nightly_report", &request)
        .await?;

    clear_mock.assert_async().await;
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared.total_entries(), None);
    Ok(())
}

#[tokio::test]
async fn test_get_dag_source() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/dagSources/abc123");
            then.status(200)
                .json_body(json!({"content": "from airflow import DAG\n"}));
        })
        .await;

    let source = client(&server).dags().get_dag_source("abc123").await?;

    assert_eq!(source.content.as_deref(), Some("from airflow import DAG\n"));
    Ok(())
}

#[tokio::test]
async fn test_fetch_all_dags_walks_pages() -> Result<()> {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags")
                .query_param("limit", "2")
                .query_param("offset", "0");
            then.status(200).json_body(json!({
                "dags": [{"dag_id": "a"}, {"dag_id": "b"}],
                "total_entries": 3
            }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/dags")
                .query_param("limit", "2")
                .query_param("offset", "2");
            then.status(200).json_body(json!({
                "dags": [{"dag_id": "c"}],
                "total_entries": 3
            }));
        })
        .await;

    let dags = fetch_all(&client(&server).dags(), 2).await?;

    first.assert_async().await;
    second.assert_async().await;
    let ids: Vec<_> = dags.iter().filter_map(|d| d.dag_id.as_deref()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    Ok(())
}
