use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::directory::TherapistRecord;
use crate::labels::Category;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// The prediction body: a single-entry object mapping the predicted label
/// to its class index, e.g. `{"Anxiety": 0}`.
///
/// Label-to-index rather than the other way around is how this API has
/// always responded; clients depend on it, so the shape is kept.
#[derive(Debug, Clone, Copy)]
pub struct PredictResponse {
    pub category: Category,
}

impl PredictResponse {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Serialize for PredictResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.category.as_str(), &self.category.index())?;
        map.end()
    }
}

/// Optional pagination parameters; both default when absent.
///
/// Signed so that a negative value parses and fails the positivity check
/// rather than being reported as unparseable.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct TherapistPage {
    pub therapists: Vec<TherapistRecord>,
    pub page: u64,
    pub per_page: u64,
    pub total: usize,
    pub total_pages: u64,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub labels: usize,
}
