use crate::core::params::Pagination;
use crate::domain::model::Collection;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 認證方式
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Bearer { token: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 不輸出密碼與 token
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn credentials(&self) -> Option<Credentials>;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str> {
        None
    }
}

/// A list endpoint that can be read one page at a time.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Page: Collection + Send;

    async fn fetch_page(&self, page: Pagination) -> Result<Self::Page>;
}
