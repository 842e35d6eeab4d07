use crate::adapters::http::ApiClient;
use crate::core::params::{Pagination, QueryParams, UpdateMask};
use crate::domain::model::{XCom, XComCollection};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;

/// Identifies the task instance whose XCom entries are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskInstanceKey<'a> {
    pub dag_id: &'a str,
    pub dag_run_id: &'a str,
    pub task_id: &'a str,
}

impl<'a> TaskInstanceKey<'a> {
    pub fn new(dag_id: &'a str, dag_run_id: &'a str, task_id: &'a str) -> Self {
        Self {
            dag_id,
            dag_run_id,
            task_id,
        }
    }

    fn validate(&self, operation: &str) -> Result<()> {
        validate_required_param(operation, "dag_id", self.dag_id)?;
        validate_required_param(operation, "dag_run_id", self.dag_run_id)?;
        validate_required_param(operation, "task_id", self.task_id)
    }

    fn segments(&self) -> [&'a str; 7] {
        [
            "dags",
            self.dag_id,
            "dagRuns",
            self.dag_run_id,
            "taskInstances",
            self.task_id,
            "xcomEntries",
        ]
    }

    fn entry_segments(&self, xcom_key: &'a str) -> [&'a str; 8] {
        let [a, b, c, d, e, f, g] = self.segments();
        [a, b, c, d, e, f, g, xcom_key]
    }
}

#[derive(Debug, Clone)]
pub struct XComApi {
    client: ApiClient,
}

impl XComApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists entries without their values.
    pub async fn get_xcom_entries(
        &self,
        task: TaskInstanceKey<'_>,
        pagination: Pagination,
    ) -> Result<XComCollection> {
        task.validate("get_xcom_entries")?;
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        self.client.get(&task.segments(), &query).await
    }

    pub async fn get_xcom_entry(&self, task: TaskInstanceKey<'_>, xcom_key: &str) -> Result<XCom> {
        task.validate("get_xcom_entry")?;
        validate_required_param("get_xcom_entry", "xcom_key", xcom_key)?;
        self.client
            .get(&task.entry_segments(xcom_key), &QueryParams::new())
            .await
    }

    pub async fn post_xcom_entries(&self, task: TaskInstanceKey<'_>, xcom: &XCom) -> Result<XCom> {
        task.validate("post_xcom_entries")?;
        self.client
            .post(&task.segments(), &QueryParams::new(), xcom)
            .await
    }

    pub async fn patch_xcom_entry(
        &self,
        task: TaskInstanceKey<'_>,
        xcom_key: &str,
        xcom: &XCom,
        update_mask: &UpdateMask,
    ) -> Result<XCom> {
        task.validate("patch_xcom_entry")?;
        validate_required_param("patch_xcom_entry", "xcom_key", xcom_key)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client
            .patch(&task.entry_segments(xcom_key), &query, xcom)
            .await
    }

    pub async fn delete_xcom_entry(&self, task: TaskInstanceKey<'_>, xcom_key: &str) -> Result<()> {
        task.validate("delete_xcom_entry")?;
        validate_required_param("delete_xcom_entry", "xcom_key", xcom_key)?;
        self.client
            .delete(&task.entry_segments(xcom_key), &QueryParams::new())
            .await
    }
}
