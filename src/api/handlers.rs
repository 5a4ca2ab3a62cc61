use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use super::error::ApiError;
use super::types::{HealthResponse, PageParams, PredictRequest, PredictResponse, TherapistPage};
use crate::classifier::Classifier;
use crate::directory::Directory;
use crate::labels::Category;

/// `POST /predict` — classify free text into one of the seven categories.
///
/// Any failure on this path, malformed body included, is a 400 with a
/// flat error body.
pub async fn predict(
    State(classifier): State<Arc<Classifier>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let prediction = classifier.predict(&request.text)?;
    log::info!(
        "predicted '{}' (index {}) for {}-byte input",
        prediction.category,
        prediction.index,
        request.text.len()
    );

    Ok(Json(PredictResponse::new(prediction.category)))
}

/// `GET /therapists?page=<int>&per_page=<int>` — one page of the directory.
///
/// Non-integer parameters and non-positive values are client errors; a page
/// beyond the end of the directory is simply empty.
pub async fn list_therapists(
    State(directory): State<Arc<Directory>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<TherapistPage>, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::bad_request("invalid query parameters"))?;

    let page = params.page();
    let per_page = params.per_page();
    if page < 1 || per_page < 1 {
        return Err(ApiError::bad_request(
            "page and per_page must be positive integers",
        ));
    }
    let (page, per_page) = (page as u64, per_page as u64);

    let result = directory.page(page, per_page);
    Ok(Json(TherapistPage {
        therapists: result.records,
        page,
        per_page,
        total: result.total,
        total_pages: result.total_pages,
    }))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        labels: Category::ALL.len(),
    })
}
