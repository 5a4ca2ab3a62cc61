mod classifier;
mod encoding;
mod error;
pub mod builder;

pub use builder::ClassifierBuilder;
pub use classifier::{Classifier, Prediction};
pub use error::ClassifierError;

/// Information about the loaded artifacts and the label set they serve.
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path the ONNX graph was loaded from
    pub model_path: String,
    /// Path the tokenizer was loaded from
    pub tokenizer_path: String,
    /// Number of classes the artifact is trained on
    pub num_labels: usize,
    /// Human-readable labels in class-index order
    pub labels: Vec<&'static str>,
    /// Longest input, in tokens, the graph accepts
    pub max_sequence_length: usize,
}
