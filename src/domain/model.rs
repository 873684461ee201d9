use serde::{Deserialize, Serialize};
use std::fmt;

/// Values read from the form for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuhuratQuery {
    pub start_date: String,
    pub end_date: String,
    pub request_type: String,
}

impl MuhuratQuery {
    /// Query pairs in the order the service expects them.
    pub fn as_params(&self) -> [(&'static str, &str); 3] {
        [
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            ("user_request", self.request_type.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhuratResponse {
    pub status: String,
    pub request_type: String,
    pub recommended_muhurats: Vec<MuhuratWindow>,
    pub pdf_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhuratWindow {
    pub nakshatra: String,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    /// Unknown severities keep their name and get no mapped color.
    Other(String),
}

impl Severity {
    pub fn color_class(&self) -> &str {
        match self {
            Severity::Info => "text-blue-400",
            Severity::Warning => "text-amber-400",
            Severity::Error => "text-red-400",
            Severity::Other(name) => name,
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            other => Severity::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Validation,
    Network,
    ApplicationStatus,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Validation => "validation",
            FailureKind::Network => "network",
            FailureKind::ApplicationStatus => "application_status",
            FailureKind::MalformedResponse => "malformed_response",
        };
        f.write_str(name)
    }
}

/// What a single `generate_muhurat` call ended up doing to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Rendered { windows: usize },
    Warned,
    Failed(FailureKind),
    Superseded,
}
