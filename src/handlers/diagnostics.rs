use axum::{extract::State, Json};

use crate::{diagnostics, models::DiagnosticReport, AppState};

/// Check whether the optional database is reachable
/// GET /test
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let budget = diagnostics::probe_budget(state.config.request_timeout);
    Json(diagnostics::collect(&state.database, &state.config.database, budget).await)
}
