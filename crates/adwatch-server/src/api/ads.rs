use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;

use adwatch_db::PgRecordStore;
use adwatch_engine::{fallback_stats, AdWire, AggregationEngine, DashboardStats};

use crate::middleware::RequestId;

use super::AppState;

/// Response envelope for `GET /ads`.
///
/// On failure `stats` still carries the baseline snapshot so the reporting
/// surface never receives an empty or malformed body.
#[derive(Debug, Serialize)]
pub(super) struct AdsEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub stats: DashboardStats,
    pub ads: Vec<AdWire>,
}

pub(super) async fn get_ads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> (StatusCode, Json<AdsEnvelope>) {
    let store = PgRecordStore::new(state.pool.clone());
    let engine = AggregationEngine::with_probe_timeout(store, state.probe_timeout);

    match engine.collect().await {
        Ok(stats) => {
            // The ads list mirrors stats.recentAds for older dashboard clients.
            let ads = stats.recent_ads.clone();
            (
                StatusCode::OK,
                Json(AdsEnvelope {
                    success: true,
                    error: None,
                    stats,
                    ads,
                }),
            )
        }
        Err(e) => {
            tracing::error!(
                request_id = %req_id.0,
                error = %e,
                "stats unavailable, serving baseline snapshot"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AdsEnvelope {
                    success: false,
                    error: Some("Failed to fetch ads".to_string()),
                    stats: fallback_stats(),
                    ads: vec![],
                }),
            )
        }
    }
}
