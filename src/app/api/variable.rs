use crate::adapters::http::ApiClient;
use crate::core::params::{Pagination, QueryParams, UpdateMask};
use crate::domain::model::{Variable, VariableCollection};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct VariableApi {
    client: ApiClient,
}

impl VariableApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 清單只含 key，值需透過 [`VariableApi::get_variable`] 取得
    pub async fn get_variables(&self, pagination: Pagination) -> Result<VariableCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        self.client.get(&["variables"], &query).await
    }

    pub async fn get_variable(&self, variable_key: &str) -> Result<Variable> {
        validate_required_param("get_variable", "variable_key", variable_key)?;
        self.client
            .get(&["variables", variable_key], &QueryParams::new())
            .await
    }

    pub async fn post_variables(&self, variable: &Variable) -> Result<Variable> {
        self.client
            .post(&["variables"], &QueryParams::new(), variable)
            .await
    }

    pub async fn patch_variable(
        &self,
        variable_key: &str,
        variable: &Variable,
        update_mask: &UpdateMask,
    ) -> Result<Variable> {
        validate_required_param("patch_variable", "variable_key", variable_key)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client
            .patch(&["variables", variable_key], &query, variable)
            .await
    }

    pub async fn delete_variable(&self, variable_key: &str) -> Result<()> {
        validate_required_param("delete_variable", "variable_key", variable_key)?;
        self.client
            .delete(&["variables", variable_key], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for VariableApi {
    type Page = VariableCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<VariableCollection> {
        self.get_variables(page).await
    }
}
