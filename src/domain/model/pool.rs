use serde::{Deserialize, Serialize};

/// Slot pool limiting how many task instances run at once.
///
/// Only `name` and `slots` are writable; the slot counters are computed by
/// the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queued_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_slots: Option<i32>,
}

impl Pool {
    pub fn new(name: impl Into<String>, slots: i32) -> Self {
        Self {
            name: Some(name.into()),
            slots: Some(slots),
            ..Self::default()
        }
    }
}

collection! {
    PoolCollection { pools: Pool } derive(Eq, Hash)
}

impl_display_json!(Pool);
