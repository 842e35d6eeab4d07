use airflow_client::utils::validation::Validate;
use airflow_client::{
    ApiClient, ClientError, ClientSettings, ErrorCategory, ErrorSeverity, Pagination, TomlConfig,
};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_client_from_toml_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let version_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/version")
                .header("authorization", "Bearer from-file")
                .header("user-agent", "nightly-report/1.0");
            then.status(200).json_body(json!({"version": "2.1.0"}));
        })
        .await;

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[server]
base_url = "{}"
timeout_seconds = 5
user_agent = "nightly-report/1.0"

[auth]
token = "from-file"
"#,
        server.url("/api/v1")
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    let client = ApiClient::from_config(&config.to_settings())?;
    let version = client.monitoring().get_version().await?;

    version_mock.assert_async().await;
    assert_eq!(version.version.as_deref(), Some("2.1.0"));
    Ok(())
}

#[tokio::test]
async fn test_default_user_agent_names_the_crate() -> Result<()> {
    let server = MockServer::start_async().await;
    let health_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/health")
                .header_exists("user-agent")
                .header("accept", "application/json");
            then.status(200).json_body(json!({}));
        })
        .await;

    let settings = ClientSettings {
        base_url: server.url("/api/v1"),
        ..ClientSettings::default()
    };
    ApiClient::from_config(&settings)?
        .monitoring()
        .get_health()
        .await?;

    health_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_retryable_severity() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/pools");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let err = ApiClient::new(server.url("/api/v1"))
        .unwrap()
        .pools()
        .get_pools(Pagination::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.category(), ErrorCategory::Api);
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    match err {
        ClientError::ApiError {
            message, problem, ..
        } => {
            assert_eq!(message, "upstream unavailable");
            assert!(problem.is_none());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_suggests_checking_credentials() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/dags");
            then.status(401).json_body(json!({
                "type": "about:blank",
                "title": "Unauthorized",
                "status": 401
            }));
        })
        .await;

    let err = ApiClient::builder(server.url("/api/v1"))
        .basic_auth("admin", "wrong")
        .build()
        .unwrap()
        .dags()
        .get_dags(Pagination::default())
        .await
        .unwrap_err();

    assert_eq!(err.severity(), ErrorSeverity::High);
    assert!(err.recovery_suggestion().contains("token"));
}

#[tokio::test]
async fn test_malformed_body_is_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/version");
            then.status(200).body("<html>login</html>");
        })
        .await;

    let err = ApiClient::new(server.url("/api/v1"))
        .unwrap()
        .monitoring()
        .get_version()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::SerializationError(_)));
    assert_eq!(err.category(), ErrorCategory::Data);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/health");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({}));
        })
        .await;

    let err = ApiClient::builder(server.url("/api/v1"))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap()
        .monitoring()
        .get_health()
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.recovery_suggestion().contains("timeout"));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let settings = ClientSettings {
        base_url: "localhost:8080".to_string(),
        ..ClientSettings::default()
    };
    assert!(settings.validate().is_err());

    let settings = ClientSettings {
        timeout_seconds: 0,
        ..ClientSettings::default()
    };
    assert!(settings.validate().is_err());
}
