use crate::adapters::http::ApiClient;
use crate::core::params::{DagRunFilter, Pagination, QueryParams, UpdateMask};
use crate::domain::model::{DagRun, DagRunCollection, ListDagRunsForm};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;
use async_trait::async_trait;

/// DAG id that matches every DAG in list queries.
pub const ALL_DAGS: &str = "~";

#[derive(Debug, Clone)]
pub struct DagRunApi {
    client: ApiClient,
}

impl DagRunApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists runs of one DAG, or of all DAGs when `dag_id` is [`ALL_DAGS`].
    pub async fn get_dag_runs(&self, dag_id: &str, filter: &DagRunFilter) -> Result<DagRunCollection> {
        validate_required_param("get_dag_runs", "dag_id", dag_id)?;
        self.client
            .get(&["dags", dag_id, "dagRuns"], &filter.to_query())
            .await
    }

    /// Page source over the runs of `dag_id`, for [`crate::core::fetch_all`].
    pub fn pages(&self, dag_id: impl Into<String>) -> DagRunPages {
        DagRunPages {
            api: self.clone(),
            dag_id: dag_id.into(),
        }
    }

    /// POST variant of the list query for filtering by many DAG ids.
    pub async fn get_dag_runs_batch(&self, form: &ListDagRunsForm) -> Result<DagRunCollection> {
        self.client
            .post(&["dags", ALL_DAGS, "dagRuns", "list"], &QueryParams::new(), form)
            .await
    }

    pub async fn get_dag_run(&self, dag_id: &str, dag_run_id: &str) -> Result<DagRun> {
        validate_required_param("get_dag_run", "dag_id", dag_id)?;
        validate_required_param("get_dag_run", "dag_run_id", dag_run_id)?;
        self.client
            .get(&["dags", dag_id, "dagRuns", dag_run_id], &QueryParams::new())
            .await
    }

    /// 觸發一次新的 DAG run
    pub async fn post_dag_run(&self, dag_id: &str, dag_run: &DagRun) -> Result<DagRun> {
        validate_required_param("post_dag_run", "dag_id", dag_id)?;
        self.client
            .post(&["dags", dag_id, "dagRuns"], &QueryParams::new(), dag_run)
            .await
    }

    pub async fn patch_dag_run(
        &self,
        dag_id: &str,
        dag_run_id: &str,
        dag_run: &DagRun,
        update_mask: &UpdateMask,
    ) -> Result<DagRun> {
        validate_required_param("patch_dag_run", "dag_id", dag_id)?;
        validate_required_param("patch_dag_run", "dag_run_id", dag_run_id)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client
            .patch(&["dags", dag_id, "dagRuns", dag_run_id], &query, dag_run)
            .await
    }

    pub async fn delete_dag_run(&self, dag_id: &str, dag_run_id: &str) -> Result<()> {
        validate_required_param("delete_dag_run", "dag_id", dag_id)?;
        validate_required_param("delete_dag_run", "dag_run_id", dag_run_id)?;
        self.client
            .delete(&["dags", dag_id, "dagRuns", dag_run_id], &QueryParams::new())
            .await
    }
}

#[derive(Debug, Clone)]
pub struct DagRunPages {
    api: DagRunApi,
    dag_id: String,
}

#[async_trait]
impl PageSource for DagRunPages {
    type Page = DagRunCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<DagRunCollection> {
        let filter = DagRunFilter {
            pagination: page,
            ..DagRunFilter::default()
        };
        self.api.get_dag_runs(&self.dag_id, &filter).await
    }
}
