use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DAG 檔案解析失敗的紀錄
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_error_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

collection! {
    ImportErrorCollection { import_errors: ImportError } derive(Eq, Hash)
}

impl_display_json!(ImportError);
