use crate::adapters::http::ApiClient;
use crate::core::params::{ListOrder, Pagination, QueryParams};
use crate::domain::model::{ImportError, ImportErrorCollection};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ImportErrorApi {
    client: ApiClient,
    order: ListOrder,
}

impl ImportErrorApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            order: ListOrder::default(),
        }
    }

    /// Sort order used when this service is walked as a [`PageSource`].
    pub fn ordered(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    pub async fn get_import_errors(
        &self,
        pagination: Pagination,
        order: &ListOrder,
    ) -> Result<ImportErrorCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        order.apply(&mut query);
        self.client.get(&["importErrors"], &query).await
    }

    pub async fn get_import_error(&self, import_error_id: i32) -> Result<ImportError> {
        let id = import_error_id.to_string();
        self.client
            .get(&["importErrors", id.as_str()], &QueryParams::new())
            .await
    }

    pub async fn delete_import_error(&self, import_error_id: i32) -> Result<()> {
        let id = import_error_id.to_string();
        self.client
            .delete(&["importErrors", id.as_str()], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for ImportErrorApi {
    type Page = ImportErrorCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<ImportErrorCollection> {
        self.get_import_errors(page, &self.order).await
    }
}
