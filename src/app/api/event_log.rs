use crate::adapters::http::ApiClient;
use crate::core::params::{ListOrder, Pagination, QueryParams};
use crate::domain::model::{EventLog, EventLogCollection};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct EventLogApi {
    client: ApiClient,
    order: ListOrder,
}

impl EventLogApi {
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

    pub async fn get_event_logs(
        &self,
        pagination: Pagination,
        order: &ListOrder,
    ) -> Result<EventLogCollection> {
        let mut query = QueryParams::new();
        pagination.apply(&mut query);
        order.apply(&mut query);
        self.client.get(&["eventLogs"], &query).await
    }

    pub async fn get_event_log(&self, event_log_id: i32) -> Result<EventLog> {
        let id = event_log_id.to_string();
        self.client
            .get(&["eventLogs", id.as_str()], &QueryParams::new())
            .await
    }
}

#[async_trait]
impl PageSource for EventLogApi {
    type Page = EventLogCollection;

    async fn fetch_page(&self, page: Pagination) -> Result<EventLogCollection> {
        self.get_event_logs(page, &self.order).await
    }
}
