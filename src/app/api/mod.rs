//! One service per resource group of the REST API.

pub mod connection;
pub mod dag;
pub mod dag_run;
pub mod event_log;
pub mod import_error;
pub mod monitoring;
pub mod pool;
pub mod task_instance;
pub mod variable;
pub mod xcom;

pub use connection::ConnectionApi;
pub use dag::DagApi;
pub use dag_run::{DagRunApi, DagRunPages, ALL_DAGS};
pub use event_log::EventLogApi;
pub use import_error::ImportErrorApi;
pub use monitoring::MonitoringApi;
pub use pool::PoolApi;
pub use task_instance::{TaskInstanceApi, ALL_DAG_RUNS};
pub use variable::VariableApi;
pub use xcom::{TaskInstanceKey, XComApi};

use crate::adapters::http::ApiClient;

impl ApiClient {
    pub fn dags(&self) -> DagApi {
        DagApi::new(self.clone())
    }

    pub fn dag_runs(&self) -> DagRunApi {
        DagRunApi::new(self.clone())
    }

    pub fn task_instances(&self) -> TaskInstanceApi {
        TaskInstanceApi::new(self.clone())
    }

    pub fn xcom(&self) -> XComApi {
        XComApi::new(self.clone())
    }

    pub fn pools(&self) -> PoolApi {
        PoolApi::new(self.clone())
    }

    pub fn variables(&self) -> VariableApi {
        VariableApi::new(self.clone())
    }

    pub fn connections(&self) -> ConnectionApi {
        ConnectionApi::new(self.clone())
    }

    pub fn import_errors(&self) -> ImportErrorApi {
        ImportErrorApi::new(self.clone())
    }

    pub fn event_logs(&self) -> EventLogApi {
        EventLogApi::new(self.clone())
    }

    pub fn monitoring(&self) -> MonitoringApi {
        MonitoringApi::new(self.clone())
    }
}
