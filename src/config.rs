use crate::error::{Result, ZabbixError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct ZabbixConfig {
    /// Full endpoint URL, e.g. `https://zabbix.example.com/api_jsonrpc.php`.
    pub url: String,
    pub username: String,
    pub password: String,
    /// HTTP basic-auth credentials for frontends behind an auth proxy.
    pub http_user: Option<String>,
    pub http_password: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub zabbix: ZabbixConfig,
}

impl Config {
    /// Load configuration from `config.toml` in the working directory.
    pub fn new() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&config_str)
            .map_err(|err| ZabbixError::Config(err.to_string()))?;
        // Credentials stay out of the logs.
        info!("Loaded config for {}", config.zabbix.url);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_minimal_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[zabbix]
url = "https://zabbix.example.com/api_jsonrpc.php"
username = "Admin"
password = "zabbix"
"#
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.zabbix.url, "https://zabbix.example.com/api_jsonrpc.php");
        assert_eq!(config.zabbix.username, "Admin");
        assert!(config.zabbix.http_user.is_none());
        assert!(config.zabbix.timeout_secs.is_none());
    }

    #[test]
    fn parses_basic_auth_and_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[zabbix]
url = "http://localhost/api_jsonrpc.php"
username = "api"
password = "secret"
http_user = "proxy"
http_password = "proxypass"
timeout_secs = 15
"#
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.zabbix.http_user.as_deref(), Some("proxy"));
        assert_eq!(config.zabbix.timeout_secs, Some(15));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::from_path("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[zabbix").unwrap();
        assert!(Config::from_path(file.path()).is_err());
    }
}
