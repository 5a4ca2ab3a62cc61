use ort::Error as OrtError;
use std::fmt;

/// Failures on the classification path.
#[derive(Debug)]
pub enum ClassifierError {
    /// Loading or running the tokenizer failed
    Tokenizer(String),
    /// Loading or running the ONNX graph failed
    Model(String),
    /// Constructing the classifier failed
    Build(String),
    /// Inference produced an unusable result
    Inference(String),
    /// The caller's input was rejected before inference
    InvalidInput(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenizer(msg) => write!(f, "tokenizer error: {}", msg),
            Self::Model(msg) => write!(f, "model error: {}", msg),
            Self::Build(msg) => write!(f, "build error: {}", msg),
            Self::Inference(msg) => write!(f, "inference error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::Build(err.to_string())
    }
}
