use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct SyncRequest {
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SyncAccepted {
    pub success: bool,
    pub message: String,
    pub sync_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(super) struct SyncFailed {
    pub success: bool,
    pub error: &'static str,
    pub details: String,
}

/// `POST /ads/sync` — records a simulated collection run.
///
/// No real upstream fetch happens here; the run is created in `RUNNING`,
/// idles for the configured delay, then completes with a simulated record
/// count.
pub(super) async fn sync_ads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SyncRequest>,
) -> axum::response::Response {
    let platform = body
        .platform
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "ALL".to_string());

    match run_sync(&state, &platform).await {
        Ok(sync_id) => (
            StatusCode::OK,
            Json(SyncAccepted {
                success: true,
                message: format!("Sync completed for {platform}"),
                sync_id,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "ad sync failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SyncFailed {
                    success: false,
                    error: "Sync failed",
                    details: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn run_sync(state: &AppState, platform: &str) -> Result<Uuid, adwatch_db::DbError> {
    let run = adwatch_db::create_sync_log(&state.pool, platform).await?;

    tokio::time::sleep(state.sync_delay).await;

    let records_fetched = rand::rng().random_range(10..60);
    adwatch_db::complete_sync_log(&state.pool, run.id, records_fetched).await?;

    Ok(run.public_id)
}
