use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// 清單端點不回傳變數值，需個別查詢
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableCollectionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

collection! {
    VariableCollection { variables: VariableCollectionItem } derive(Eq, Hash)
}

impl_display_json!(Variable, VariableCollectionItem);
