use axum::Json;

use crate::models::SchoolInfo;

/// Public info for the school used by the frontend.
/// GET /api/info
pub async fn get_school_info() -> Json<SchoolInfo> {
    Json(SchoolInfo::ibnou_sina())
}
