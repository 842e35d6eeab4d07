use crate::core::params::QueryParams;
use crate::domain::ports::{ConfigProvider, Credentials};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Generic HTTP client shared by all API services.
///
/// Cloning is cheap: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    credentials: Option<Credentials>,
    client: Client,
}

/// 建立 [`ApiClient`] 的設定
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer {
            token: token.into(),
        });
        self
    }

    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        validate_url("base_url", &self.base_url)?;
        let base_url = Url::parse(&self.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("airflow-client-rs/{}", env!("CARGO_PKG_VERSION")));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(ApiClient {
            base_url,
            credentials: self.credentials,
            client,
        })
    }
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
        }
    }

    /// Client without authentication and with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Self::builder(config.base_url())
            .credentials(config.credentials())
            .timeout(Duration::from_secs(config.timeout_seconds()));
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL. Each segment is
    /// percent-encoded, so identifiers may contain `/` or spaces.
    /// `.` and `..` are rejected since URL parsing would drop them.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ClientError::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ClientError::ConfigError {
                message: format!("base URL '{}' cannot carry a path", self.base_url),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str], query: &QueryParams) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query.as_pairs());
        }
        builder = match &self.credentials {
            Some(Credentials::Basic { username, password }) => {
                builder.basic_auth(username, Some(password))
            }
            Some(Credentials::Bearer { token }) => builder.bearer_auth(token),
            None => builder,
        };
        Ok(builder)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("API call failed with status {}", status);
        Err(ClientError::from_response(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str], query: &QueryParams) -> Result<T> {
        let builder = self.request(Method::GET, segments, query)?;
        self.decode(builder).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], query: &QueryParams, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, segments, query)?.json(body);
        self.decode(builder).await
    }

    pub async fn patch<B, T>(&self, segments: &[&str], query: &QueryParams, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, segments, query)?.json(body);
        self.decode(builder).await
    }

    /// Any 2xx counts as success; the body (usually empty) is discarded.
    pub async fn delete(&self, segments: &[&str], query: &QueryParams) -> Result<()> {
        let builder = self.request(Method::DELETE, segments, query)?;
        self.execute(builder).await?;
        Ok(())
    }
}
