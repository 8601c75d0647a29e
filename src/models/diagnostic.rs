use serde::Serialize;

pub const RUNNING: &str = "Running";
pub const NOT_AVAILABLE: &str = "Not Available";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const CONNECTED: &str = "Connected";
pub const SET: &str = "Set";
pub const NOT_SET: &str = "Not Set";

/// Body of `GET /test`. Every field is a human-readable status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticReport {
    fn default() -> Self {
        DiagnosticReport {
            backend: RUNNING.to_string(),
            database: NOT_AVAILABLE.to_string(),
            database_url: NOT_SET.to_string(),
            database_name: NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}
