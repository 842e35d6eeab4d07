use serde::{Deserialize, Serialize};

/// Connection as listed by `GET /connections`; secrets are never included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionCollectionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conn_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    #[serde(flatten)]
    pub item: ConnectionCollectionItem,
    /// Write-only; the server never echoes it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Connection {
    pub fn new(connection_id: impl Into<String>, conn_type: impl Into<String>) -> Self {
        Self {
            item: ConnectionCollectionItem {
                connection_id: Some(connection_id.into()),
                conn_type: Some(conn_type.into()),
                ..ConnectionCollectionItem::default()
            },
            ..Self::default()
        }
    }
}

collection! {
    ConnectionCollection { connections: ConnectionCollectionItem } derive(Eq, Hash)
}

impl_display_json!(ConnectionCollectionItem, Connection);
