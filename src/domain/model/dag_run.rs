use super::common::DagState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DAG 的一次執行
///
/// `conf` is free-form JSON, so this type only supports equality, not
/// hashing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRun {
    /// Run id. The server generates one when a trigger request leaves it
    /// out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DagState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_trigger: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<serde_json::Map<String, serde_json::Value>>,
}

impl DagRun {
    /// Trigger request body.
    pub fn trigger(dag_run_id: Option<String>) -> Self {
        Self {
            dag_run_id,
            ..Self::default()
        }
    }

    pub fn with_execution_date(mut self, execution_date: DateTime<Utc>) -> Self {
        self.execution_date = Some(execution_date);
        self
    }

    pub fn with_conf(mut self, conf: serde_json::Map<String, serde_json::Value>) -> Self {
        self.conf = Some(conf);
        self
    }
}

/// Body of the batch DAG run query; lets a caller filter by many DAG ids
/// without running into URL length limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListDagRunsForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date_lte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_lte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_gte: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_lte: Option<DateTime<Utc>>,
}

collection! {
    DagRunCollection { dag_runs: DagRun } derive()
}

impl_display_json!(DagRun, ListDagRunsForm);
