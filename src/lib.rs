//! Typed async client for the Airflow stable REST API (`/api/v1`).
//!
//! ```no_run
//! # async fn demo() -> airflow_client::Result<()> {
//! use airflow_client::{ApiClient, Pagination};
//!
//! let client = ApiClient::builder("http://localhost:8080/api/v1")
//!     .basic_auth("admin", "admin")
//!     .build()?;
//! let pools = client.pools().get_pools(Pagination::default()).await?;
//! println!("{}", pools);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, ClientSettings};

pub use crate::adapters::http::{ApiClient, ApiClientBuilder};
pub use crate::app::api::{
    ConnectionApi, DagApi, DagRunApi, EventLogApi, ImportErrorApi, MonitoringApi, PoolApi,
    TaskInstanceApi, TaskInstanceKey, VariableApi, XComApi, ALL_DAGS, ALL_DAG_RUNS,
};
pub use crate::core::{
    fetch_all, Collection, ConfigProvider, Credentials, DagRunFilter, DateRange, ListOrder,
    LogOptions, PageSource, Pagination, TaskInstanceFilter, UpdateMask,
};
pub use crate::domain::model;
pub use crate::utils::error::{ClientError, ErrorCategory, ErrorSeverity, Result};
