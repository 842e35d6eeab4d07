use crate::adapters::http::ApiClient;
use crate::app::api::dag_run::ALL_DAGS;
use crate::core::params::{LogOptions, QueryParams, TaskInstanceFilter};
use crate::domain::model::{ListTaskInstanceForm, TaskInstance, TaskInstanceCollection, TaskLog};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;

/// DAG run id that matches every run in list queries.
pub const ALL_DAG_RUNS: &str = "~";

#[derive(Debug, Clone)]
pub struct TaskInstanceApi {
    client: ApiClient,
}

impl TaskInstanceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_task_instances(
        &self,
        dag_id: &str,
        dag_run_id: &str,
        filter: &TaskInstanceFilter,
    ) -> Result<TaskInstanceCollection> {
        validate_required_param("get_task_instances", "dag_id", dag_id)?;
        validate_required_param("get_task_instances", "dag_run_id", dag_run_id)?;
        self.client
            .get(
                &["dags", dag_id, "dagRuns", dag_run_id, "taskInstances"],
                &filter.to_query(),
            )
            .await
    }

    pub async fn get_task_instances_batch(
        &self,
        form: &ListTaskInstanceForm,
    ) -> Result<TaskInstanceCollection> {
        self.client
            .post(
                &["dags", ALL_DAGS, "dagRuns", ALL_DAG_RUNS, "taskInstances", "list"],
                &QueryParams::new(),
                form,
            )
            .await
    }

    pub async fn get_task_instance(
        &self,
        dag_id: &str,
        dag_run_id: &str,
        task_id: &str,
    ) -> Result<TaskInstance> {
        validate_required_param("get_task_instance", "dag_id", dag_id)?;
        validate_required_param("get_task_instance", "dag_run_id", dag_run_id)?;
        validate_required_param("get_task_instance", "task_id", task_id)?;
        self.client
            .get(
                &["dags", dag_id, "dagRuns", dag_run_id, "taskInstances", task_id],
                &QueryParams::new(),
            )
            .await
    }

    /// 讀取某次嘗試的 log；內容過長時需帶 continuation token 分段讀取
    pub async fn get_log(
        &self,
        dag_id: &str,
        dag_run_id: &str,
        task_id: &str,
        try_number: u32,
        options: &LogOptions,
    ) -> Result<TaskLog> {
        validate_required_param("get_log", "dag_id", dag_id)?;
        validate_required_param("get_log", "dag_run_id", dag_run_id)?;
        validate_required_param("get_log", "task_id", task_id)?;
        let try_number = try_number.to_string();
        self.client
            .get(
                &[
                    "dags",
                    dag_id,
                    "dagRuns",
                    dag_run_id,
                    "taskInstances",
                    task_id,
                    "logs",
                    try_number.as_str(),
                ],
                &options.to_query(),
            )
            .await
    }
}
