use contracts::domain::a001_order::report::REPORT_FILE_NAME;
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Deployed script URL of the remote order store
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_file_name() -> String {
    REPORT_FILE_NAME.to_string()
}

/// Served next to `index.html` by the static host
pub const CONFIG_PATH: &str = "config.toml";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[remote]
endpoint = "https://script.google.com/macros/s/DEPLOYMENT_ID/exec"

[report]
file_name = "reporte_pedidos.pdf"
"#;

pub fn parse_config(text: &str) -> Result<AppConfig, String> {
    let config: AppConfig = toml::from_str(text).map_err(|e| format!("{e}"))?;
    if config.remote.endpoint.trim().is_empty() {
        return Err("remote.endpoint must not be empty".to_string());
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. `config.toml` served alongside the app
/// 2. Falls back to embedded default config
pub async fn load_config() -> Result<AppConfig, String> {
    match fetch_config_file().await {
        Ok(text) => match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config from {}", CONFIG_PATH);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_PATH, e),
        },
        Err(e) => log::warn!("{} not available: {}", CONFIG_PATH, e),
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

async fn fetch_config_file() -> Result<String, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("{e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.text().await.map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert!(config.remote.endpoint.starts_with("https://"));
        assert_eq!(config.report.file_name, "reporte_pedidos.pdf");
    }

    #[test]
    fn test_report_section_is_optional() {
        let config = parse_config("[remote]\nendpoint = \"http://localhost:8080/exec\"\n").unwrap();
        assert_eq!(config.remote.endpoint, "http://localhost:8080/exec");
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        assert!(parse_config("[remote]\nendpoint = \"  \"\n").is_err());
        assert!(parse_config("not toml at all [").is_err());
    }
}
