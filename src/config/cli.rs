use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::app::commands::Command;
use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::core::{ConfigProvider, Credentials};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "airflow-client")]
#[command(version, about = "Command line client for the Airflow stable REST API")]
pub struct CliConfig {
    /// Base URL of the API, including the `/api/v1` prefix
    #[arg(long, global = true, env = "AIRFLOW_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, env = "AIRFLOW_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "AIRFLOW_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Bearer token, instead of username and password
    #[arg(long, global = true, env = "AIRFLOW_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with [server], [auth] and [logging] sections
    #[arg(long, short, global = true)]
    pub config: Option<String>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// 合併設定：TOML 檔案為底，命令列與環境變數覆寫
    ///
    /// Credentials given on the command line replace those of the file as a
    /// whole, so a `--token` never mixes with a username from the file.
    pub fn resolve(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::debug!("📄 Loading configuration from {}", path);
                TomlConfig::from_file(path)?.to_settings()
            }
            None => ClientSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if self.username.is_some() || self.password.is_some() || self.token.is_some() {
            settings.username = self.username.clone();
            settings.password = self.password.clone();
            settings.token = self.token.clone();
        }
        settings.logging.verbose |= self.verbose;
        settings.logging.json |= self.json_logs;

        Ok(settings)
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn credentials(&self) -> Option<Credentials> {
        ClientSettings {
            username: self.username.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
            ..ClientSettings::default()
        }
        .credentials()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.resolve()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::PoolCommand;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = parse(&[
            "airflow-client",
            "pools",
            "get",
            "default_pool",
            "--base-url",
            "http://airflow:8080/api/v1",
            "--verbose",
        ]);

        assert_eq!(cli.base_url(), "http://airflow:8080/api/v1");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Pools(PoolCommand::Get { ref name }) if name == "default_pool"
        ));
    }

    #[test]
    fn test_resolve_overrides_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[server]
base_url = "http://from-file:8080/api/v1"
timeout_seconds = 5

[auth]
username = "file-user"
password = "file-pass"
"#,
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = parse(&[
            "airflow-client",
            "--config",
            &path,
            "--token",
            "abc",
            "--timeout-seconds",
            "60",
            "health",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.base_url, "http://from-file:8080/api/v1");
        assert_eq!(settings.timeout_seconds, 60);
        assert_eq!(settings.username, None);
        assert_eq!(
            settings.credentials(),
            Some(Credentials::Bearer {
                token: "abc".to_string()
            })
        );
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_missing_config_file_is_rejected() {
        let cli = parse(&[
            "airflow-client",
            "--config",
            "/definitely/not/here.toml",
            "version",
        ]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_all_conflicts_with_limit() {
        let result =
            CliConfig::try_parse_from(["airflow-client", "pools", "list", "--all", "--limit", "5"]);
        assert!(result.is_err());
    }
}
