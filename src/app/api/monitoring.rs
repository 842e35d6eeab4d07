use crate::adapters::http::ApiClient;
use crate::core::params::QueryParams;
use crate::domain::model::{HealthInfo, VersionInfo};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct MonitoringApi {
    client: ApiClient,
}

impl MonitoringApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 健康檢查端點不需認證
    pub async fn get_health(&self) -> Result<HealthInfo> {
        self.client.get(&["health"], &QueryParams::new()).await
    }

    pub async fn get_version(&self) -> Result<VersionInfo> {
        self.client.get(&["version"], &QueryParams::new()).await
    }
}
