use crate::adapters::http::ApiClient;
use crate::core::params::{Pagination, QueryParams, UpdateMask};
use crate::domain::model::{
    ClearTaskInstance, Dag, DagCollection, DagDetail, DagSource, Task, TaskCollection,
    TaskInstanceReferenceCollection,
};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;
use async_trait::async_trait;

/// DAG 相關端點
#[derive(Debug, Clone)]
pub struct DagApi {
    client: ApiClient,
}

impl DagApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_dags(&self, pagination: Pagination) -> Result<DagCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        self.client.get(&["dags"], &query).await
    }

    /// Basic information stored in the metadata database. Use
    /// [`DagApi::get_dag_details`] for the parsed DAG.
    pub async fn get_dag(&self, dag_id: &str) -> Result<Dag> {
        validate_required_param("get_dag", "dag_id", dag_id)?;
        self.client.get(&["dags", dag_id], &QueryParams::new()).await
    }

    pub async fn patch_dag(&self, dag_id: &str, dag: &Dag, update_mask: &UpdateMask) -> Result<Dag> {
        validate_required_param("patch_dag", "dag_id", dag_id)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client.patch(&["dags", dag_id], &query, dag).await
    }

    /// Pauses or unpauses a DAG.
    pub async fn set_paused(&self, dag_id: &str, is_paused: bool) -> Result<Dag> {
        self.patch_dag(dag_id, &Dag::paused(is_paused), &UpdateMask::new(["is_paused"]))
            .await
    }

    pub async fn get_dag_details(&self, dag_id: &str) -> Result<DagDetail> {
        validate_required_param("get_dag_details", "dag_id", dag_id)?;
        self.client
            .get(&["dags", dag_id, "details"], &QueryParams::new())
            .await
    }

    pub async fn get_tasks(&self, dag_id: &str) -> Result<TaskCollection> {
        validate_required_param("get_tasks", "dag_id", dag_id)?;
        self.client
            .get(&["dags", dag_id, "tasks"], &QueryParams::new())
            .await
    }

    pub async fn get_task(&self, dag_id: &str, task_id: &str) -> Result<Task> {
        validate_required_param("get_task", "dag_id", dag_id)?;
        validate_required_param("get_task", "task_id", task_id)?;
        self.client
            .get(&["dags", dag_id, "tasks", task_id], &QueryParams::new())
            .await
    }

    /// Clears task instances of a DAG in a date range. With `dry_run` the
    /// server only reports what it would clear.
    pub async fn post_clear_task_instances(
        &self,
        dag_id: &str,
        clear: &ClearTaskInstance,
    ) -> Result<TaskInstanceReferenceCollection> {
        validate_required_param("post_clear_task_instances", "dag_id", dag_id)?;
        self.client
            .post(&["dags", dag_id, "clearTaskInstances"], &QueryParams::new(), clear)
            .await
    }

    pub async fn get_dag_source(&self, file_token: &str) -> Result<DagSource> {
        validate_required_param("get_dag_source", "file_token", file_token)?;
        self.client
            .get(&["dagSources", file_token], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for DagApi {
    type Page = DagCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<DagCollection> {
        self.get_dags(page).await
    }
}
