//! Mental-health text triage behind a small HTTP API.
//!
//! Two independent endpoints share one server process: `POST /predict`
//! classifies free text into one of seven fixed mental-health categories
//! using opaque, pre-trained artifacts (a tokenizer and an ONNX graph),
//! and `GET /therapists` serves pages of a static therapist directory.
//! Both are pure functions over their inputs and process-wide immutable
//! state loaded once at startup.
//!
//! # Basic Usage
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use amygdala::{BundledModel, Classifier, ModelManager};
//!
//! let manager = ModelManager::new_default()?;
//! manager.ensure_downloaded(BundledModel::MentalMiniLM).await?;
//!
//! let classifier = Classifier::builder()
//!     .with_model(&manager, BundledModel::MentalMiniLM)?
//!     .build()?;
//!
//! let prediction = classifier.predict("I feel hopeless")?;
//! println!("{} -> {}", prediction.category, prediction.index);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier and directory are immutable after startup and `Send +
//! Sync`; one `Arc` of each is shared across all request handlers without
//! locking.

pub mod api;
pub mod classifier;
pub mod directory;
pub mod labels;
pub mod model_manager;
pub mod models;
mod runtime;

pub use api::AppState;
pub use classifier::{Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, Prediction};
pub use directory::{Directory, DirectoryPage, TherapistRecord};
pub use labels::Category;
pub use model_manager::{ModelError, ModelManager};
pub use models::{BundledModel, ModelCharacteristics, ModelInfo};
pub use runtime::{create_session_builder, RuntimeConfig};

pub fn init_logger() {
    env_logger::init();
}
