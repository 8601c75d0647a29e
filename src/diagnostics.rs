// Diagnostic probe behind GET /test.
// Every failure path degrades to a status string; nothing here returns an error.

use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    config::DatabaseEnv,
    db::DatabaseLookup,
    models::diagnostic::{self, DiagnosticReport},
};

const MAX_COLLECTIONS: usize = 10;
const MAX_REASON_CHARS: usize = 50;
const LIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest the collection listing may take when requests are cut off after
/// `request_timeout`. Half the request budget is left for the response.
pub fn probe_budget(request_timeout: Duration) -> Duration {
    LIST_TIMEOUT.min(request_timeout / 2)
}

/// Probes the database handle, then reports which variables are configured.
/// Listing collections is abandoned after `budget`.
pub async fn collect(lookup: &DatabaseLookup, env: &DatabaseEnv, budget: Duration) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    match lookup {
        DatabaseLookup::Missing => {
            report.database = "Database module not found".to_string();
        }
        DatabaseLookup::Uninitialized => {
            report.database = "Available but not initialized".to_string();
        }
        DatabaseLookup::Failed(reason) => {
            report.database = format!("Error: {}", truncate(reason));
        }
        DatabaseLookup::Ready(handle) => {
            report.database = "Available".to_string();
            report.connection_status = diagnostic::CONNECTED.to_string();
            debug!("Probing database {:?}", handle.name());

            match tokio::time::timeout(budget, handle.list_collection_names()).await {
                Ok(Ok(collections)) => {
                    report.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
                    report.database = "Connected & Working".to_string();
                }
                Ok(Err(e)) => {
                    warn!("Database probe failed: {:#}", e);
                    report.database = format!("Connected but Error: {}", truncate(&format!("{:#}", e)));
                }
                Err(_) => {
                    warn!("Database probe timed out after {:?}", budget);
                    report.database = "Connected but Error: timed out".to_string();
                }
            }
        }
    }

    // Reported from the environment regardless of the probe outcome
    report.database_url = set_label(env.url.is_some());
    report.database_name = set_label(env.name.is_some());

    report
}

fn set_label(is_set: bool) -> String {
    let label = if is_set { diagnostic::SET } else { diagnostic::NOT_SET };
    label.to_string()
}

fn truncate(reason: &str) -> String {
    reason.chars().take(MAX_REASON_CHARS).collect()
}
