use crate::adapters::http::ApiClient;
use crate::core::params::{Pagination, QueryParams, UpdateMask};
use crate::domain::model::{Connection, ConnectionCollection};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_param;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ConnectionApi {
    client: ApiClient,
}

impl ConnectionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_connections(&self, pagination: Pagination) -> Result<ConnectionCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        self.client.get(&["connections"], &query).await
    }

    pub async fn get_connection(&self, connection_id: &str) -> Result<Connection> {
        validate_required_param("get_connection", "connection_id", connection_id)?;
        self.client
            .get(&["connections", connection_id], &QueryParams::new())
            .await
    }

    pub async fn post_connection(&self, connection: &Connection) -> Result<Connection> {
        self.client
            .post(&["connections"], &QueryParams::new(), connection)
            .await
    }

    pub async fn patch_connection(
        &self,
        connection_id: &str,
        connection: &Connection,
        update_mask: &UpdateMask,
    ) -> Result<Connection> {
        validate_required_param("patch_connection", "connection_id", connection_id)?;
        let mut query = QueryParams::new();
        update_mask.apply(&mut query);
        self.client
            .patch(&["connections", connection_id], &query, connection)
            .await
    }

    pub async fn delete_connection(&self, connection_id: &str) -> Result<()> {
        validate_required_param("delete_connection", "connection_id", connection_id)?;
        self.client
            .delete(&["connections", connection_id], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for ConnectionApi {
    type Page = ConnectionCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<ConnectionCollection> {
        self.get_connections(page).await
    }
}
