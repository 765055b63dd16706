use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{error, warn};

use crate::{
    app_state::AppState,
    listings::{
        dtos::{ErrorResponse, GenerateRequest, GenerateResponse},
        service::{GenerateError, generate},
    },
};

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "listings",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Listing generated", body = GenerateResponse),
        (status = 400, description = "Invalid source id", body = ErrorResponse),
        (status = 404, description = "Source product page not found", body = ErrorResponse),
        (status = 422, description = "Source page could not be parsed", body = ErrorResponse),
        (status = 502, description = "Source page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn generate_listing(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    let source_id = match payload.validate() {
        Ok(source_id) => source_id,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    match generate(state.page_source.as_ref(), &state.transformer, source_id).await {
        Ok(generated) => Json(GenerateResponse {
            success: true,
            source: generated.source,
            listing: generated.listing,
            generated_at: Utc::now(),
        })
        .into_response(),
        Err(err) => {
            let status = status_for(&err);
            if status.is_server_error() {
                error!(source_id, error = %err, "listing generation failed");
            } else {
                warn!(source_id, error = %err, "listing generation rejected");
            }
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn status_for(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::Fetch(fetch) if fetch.is_not_found() => StatusCode::NOT_FOUND,
        GenerateError::Fetch(_) => StatusCode::BAD_GATEWAY,
        GenerateError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
