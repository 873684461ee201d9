#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::collector::StaticForm;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:8000/ai-muhurat-range";
pub const DEFAULT_REQUEST_TYPE: &str = "general";

/// Settings after merging flags over the optional TOML file over defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub form: StaticForm,
    pub output_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            form: StaticForm::new("", "", DEFAULT_REQUEST_TYPE),
            output_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = file.api_endpoint() {
            config.api_endpoint = endpoint.to_string();
        }
        if let Some(form) = &file.form {
            if let Some(v) = &form.start_date {
                config.form.start_date = v.clone();
            }
            if let Some(v) = &form.end_date {
                config.form.end_date = v.clone();
            }
            if let Some(v) = &form.request_type {
                config.form.request_type = v.clone();
            }
        }
        config.output_path = file.output_path().map(str::to_string);
        config
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &cli::CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Self::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };

        if let Some(v) = &cli.api_endpoint {
            config.api_endpoint = v.clone();
        }
        if let Some(v) = &cli.start_date {
            config.form.start_date = v.clone();
        }
        if let Some(v) = &cli.end_date {
            config.form.end_date = v.clone();
        }
        if let Some(v) = &cli.request_type {
            config.form.request_type = v.clone();
        }
        if let Some(v) = &cli.output {
            config.output_path = Some(v.clone());
        }

        Ok(config)
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for AppConfig {
    // Empty form dates are not a config error; the controller warns on them.
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        if let Some(path) = &self.output_path {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.form.request_type, "general");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let file = TomlConfig::from_toml_str(
            r#"
[form]
start_date = "2025-03-01"
end_date = "2025-03-31"
"#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&file);
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.form.start_date, "2025-03-01");
        assert_eq!(config.form.request_type, DEFAULT_REQUEST_TYPE);
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = AppConfig {
            api_endpoint: "ftp://127.0.0.1/ai-muhurat-range".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nendpoint = \"http://file.example/ai-muhurat-range\"\n\n[form]\nstart_date = \"2025-01-01\"\nend_date = \"2025-01-31\"\nrequest_type = \"wedding\""
        )
        .unwrap();

        let cli = cli::CliConfig {
            config: Some(file.path().to_path_buf()),
            end_date: Some("2025-02-15".to_string()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.api_endpoint, "http://file.example/ai-muhurat-range");
        assert_eq!(config.form.start_date, "2025-01-01");
        assert_eq!(config.form.end_date, "2025-02-15");
        assert_eq!(config.form.request_type, "wedding");
    }
}
