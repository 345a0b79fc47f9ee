use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::{info, warn};
use crate::controller::AppState;
use crate::errors::ReserveError;
use crate::helpers::form_data::collect_fields;
use crate::helpers::timestamp::now_iso_8601;
use crate::models::reservation::ReservationSubmission;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/reserve", post(submit_reservation))
        .route_layer(Extension(app_state))
}

pub async fn submit_reservation(
    Extension(app_state): Extension<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match relay_reservation(&app_state, multipart).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn relay_reservation(
    app_state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), ReserveError> {
    let fields = collect_fields(multipart?).await?;

    if ReservationSubmission::is_bot(&fields) {
        warn!("Honeypot field filled, dropping submission silently");
        return Ok(());
    }

    let submission = ReservationSubmission::try_from(&fields)?;
    let body = submission.render_message(&now_iso_8601()?);

    app_state.gateway
        .send(
            &app_state.config.twilio_from,
            &app_state.config.owner_phone,
            &body,
        ).await?;

    info!(
        "Relayed reservation for tour '{}' on {}",
        submission.tour, submission.date
    );
    Ok(())
}
