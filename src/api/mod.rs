//! The HTTP surface: two stateless endpoints over process-wide immutable
//! state, plus a liveness probe.

pub mod error;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;

use crate::classifier::Classifier;
use crate::directory::Directory;

pub use error::ApiError;

/// Shared state for all route handlers. Everything here is read-only after
/// startup, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub directory: Arc<Directory>,
}

impl AppState {
    pub fn new(classifier: Classifier, directory: Directory) -> Self {
        Self {
            classifier: Arc::new(classifier),
            directory: Arc::new(directory),
        }
    }
}

impl FromRef<AppState> for Arc<Classifier> {
    fn from_ref(state: &AppState) -> Self {
        state.classifier.clone()
    }
}

impl FromRef<AppState> for Arc<Directory> {
    fn from_ref(state: &AppState) -> Self {
        state.directory.clone()
    }
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/therapists", get(handlers::list_therapists))
        .route("/health", get(handlers::health))
        .with_state(state)
}
