use super::common::{ClassReference, TimeDelta, TriggerRule, WeightRule};
use super::dag::Dag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskExtraLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ClassReference>,
}

/// Simplified representation of an operator inside a DAG.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<ClassReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_rule: Option<TriggerRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_links: Option<Vec<TaskExtraLinks>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on_past: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_downstream: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_timeout: Option<TimeDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_delay: Option<TimeDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_exponential_backoff: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_rule: Option<WeightRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_fgcolor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_fields: Option<Vec<String>>,
    /// Only set for SubDagOperator tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_dag: Option<Box<Dag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_task_ids: Option<Vec<String>>,
}

collection! {
    TaskCollection { tasks: Task } derive(Eq, Hash)
}

impl_display_json!(Task, TaskExtraLinks);
