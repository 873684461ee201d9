use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "muhurat-view")]
#[command(about = "Request AI muhurat recommendations and render them as an HTML page")]
pub struct CliConfig {
    #[arg(long, help = "Start of the date range, e.g. 2025-01-01")]
    pub start_date: Option<String>,

    #[arg(long, help = "End of the date range, e.g. 2025-01-31")]
    pub end_date: Option<String>,

    #[arg(long, help = "Event category, e.g. wedding or griha_pravesh")]
    pub request_type: Option<String>,

    #[arg(long, help = "Muhurat range endpoint [default: http://127.0.0.1:8000/ai-muhurat-range]")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "TOML file with [api], [form] and [output] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write the page here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "muhurat-view",
            "--start-date",
            "2025-01-01",
            "--end-date",
            "2025-01-31",
            "--request-type",
            "wedding",
            "--verbose",
        ]);

        assert_eq!(config.start_date.as_deref(), Some("2025-01-01"));
        assert_eq!(config.end_date.as_deref(), Some("2025-01-31"));
        assert_eq!(config.request_type.as_deref(), Some("wedding"));
        assert!(config.verbose);
        assert!(config.api_endpoint.is_none());
        assert!(config.config.is_none());
    }
}
