use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XComCollectionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_id: Option<String>,
}

/// XCom entry including its value, as returned by the single-entry endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XCom {
    #[serde(flatten)]
    pub item: XComCollectionItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl XCom {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            item: XComCollectionItem {
                key: Some(key.into()),
                ..XComCollectionItem::default()
            },
            value: Some(value.into()),
        }
    }
}

collection! {
    XComCollection { xcom_entries: XComCollectionItem } derive(Eq, Hash)
}

impl_display_json!(XComCollectionItem, XCom);
