//! Data-transfer models of the Airflow stable REST API.
//!
//! Field names follow the JSON wire names. Every field the server may omit
//! is an `Option`, and absent values are left out when serializing so a
//! partially filled model can be sent as a PATCH body.

/// A response envelope holding a list of one entity type plus the total
/// number of entries the server knows about.
pub trait Collection {
    type Item;

    fn items(&self) -> &[Self::Item];

    fn into_items(self) -> Vec<Self::Item>;

    fn total_entries(&self) -> Option<i32>;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// 以 pretty JSON 作為可讀的字串表示
macro_rules! impl_display_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )+
    };
}

/// Declares a collection envelope `$name` whose list lives under `$field`.
macro_rules! collection {
    (
        $(#[$meta:meta])*
        $name:ident { $field:ident : $item:ty } derive($($derive:ident),*)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize $(, $derive)*)]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $field: Option<Vec<$item>>,
            /// Count of all entries on the server, not just this page.
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub total_entries: Option<i32>,
        }

        impl $name {
            pub fn new(items: Vec<$item>) -> Self {
                Self {
                    $field: Some(items),
                    total_entries: None,
                }
            }

            pub fn with_total_entries(mut self, total_entries: i32) -> Self {
                self.total_entries = Some(total_entries);
                self
            }

            /// 加入一筆項目；清單尚未存在時先建立
            pub fn push(&mut self, item: $item) -> &mut Self {
                self.$field.get_or_insert_with(Vec::new).push(item);
                self
            }
        }

        impl $crate::domain::model::Collection for $name {
            type Item = $item;

            fn items(&self) -> &[$item] {
                self.$field.as_deref().unwrap_or_default()
            }

            fn into_items(self) -> Vec<$item> {
                self.$field.unwrap_or_default()
            }

            fn total_entries(&self) -> Option<i32> {
                self.total_entries
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::domain::model::Collection::into_items(self).into_iter()
            }
        }

        impl_display_json!($name);
    };
}

pub mod common;
pub mod connection;
pub mod dag;
pub mod dag_run;
pub mod event_log;
pub mod import_error;
pub mod monitoring;
pub mod pool;
pub mod task;
pub mod task_instance;
pub mod variable;
pub mod xcom;

pub use common::{
    ClassReference, CronExpression, CronExpressionType, DagState, ErrorResponse, RelativeDelta,
    RelativeDeltaType, ScheduleInterval, Tag, TaskState, TimeDelta, TimeDeltaType, TriggerRule,
    WeightRule,
};
pub use connection::{Connection, ConnectionCollection, ConnectionCollectionItem};
pub use dag::{
    ClearTaskInstance, Dag, DagCollection, DagDetail, DagSource, TaskInstanceReference,
    TaskInstanceReferenceCollection,
};
pub use dag_run::{DagRun, DagRunCollection, ListDagRunsForm};
pub use event_log::{EventLog, EventLogCollection};
pub use import_error::{ImportError, ImportErrorCollection};
pub use monitoring::{HealthInfo, HealthStatus, MetadatabaseStatus, SchedulerStatus, VersionInfo};
pub use pool::{Pool, PoolCollection};
pub use task::{Task, TaskCollection, TaskExtraLinks};
pub use task_instance::{
    ListTaskInstanceForm, SlaMiss, SlaMissCollection, TaskInstance, TaskInstanceCollection,
    TaskLog,
};
pub use variable::{Variable, VariableCollection, VariableCollectionItem};
pub use xcom::{XCom, XComCollection, XComCollectionItem};
