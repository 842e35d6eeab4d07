use crate::adapters::http::ApiClient;
use crate::core::params::{Pagination, QueryParams, UpdateMask};
use crate::domain::model::{Pool, PoolCollection};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PoolApi {
    client: ApiClient,
}

impl PoolApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_pools(&self, pagination: Pagination) -> Result<PoolCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        self.client.get(&["pools"], &query).await
    }

    pub async fn get_pool(&self, pool_name: &str) -> Result<Pool> {
        validate_required_param("get_pool", "pool_name", pool_name)?;
        self.client
            .get(&["pools", pool_name], &QueryParams::new())
            .await
    }

    /// The server answers 409 when a pool with the same name exists.
    pub async fn post_pool(&self, pool: &Pool) -> Result<Pool> {
        self.client.post(&["pools"], &QueryParams::new(), pool).await
    }

    pub async fn patch_pool(
        &self,
        pool_name: &str,
        pool: &Pool,
        update_mask: &UpdateMask,
    ) -> Result<Pool> {
        validate_required_param("patch_pool", "pool_name", pool_name)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client.patch(&["pools", pool_name], &query, pool).await
    }

    pub async fn delete_pool(&self, pool_name: &str) -> Result<()> {
        validate_required_param("delete_pool", "pool_name", pool_name)?;
        self.client
            .delete(&["pools", pool_name], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for PoolApi {
    type Page = PoolCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<PoolCollection> {
        self.get_pools(page).await
    }
}
