use super::common::{ScheduleInterval, Tag, TimeDelta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DAG 基本資訊（資料庫中的 DagModel）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dag_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subdag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fileloc: Option<String>,
    /// Opaque token accepted by `GET /dagSources/{file_token}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_interval: Option<ScheduleInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Dag {
    /// Body for `patch_dag` that only toggles the paused flag.
    pub fn paused(is_paused: bool) -> Self {
        Self {
            is_paused: Some(is_paused),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagDetail {
    #[serde(flatten)]
    pub dag: Dag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catchup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_run_timeout: Option<TimeDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_md: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,
}

/// Source code of a DAG file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// 清除 task instances 的條件
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearTaskInstance {
    /// Only report what would be cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_failed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_subdags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_parentdag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_dag_runs: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskInstanceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_run_id: Option<String>,
}

collection! {
    DagCollection { dags: Dag } derive(Eq, Hash)
}

collection! {
    TaskInstanceReferenceCollection { task_instances: TaskInstanceReference } derive(Eq, Hash)
}

impl_display_json!(Dag, DagDetail, DagSource, ClearTaskInstance, TaskInstanceReference);
