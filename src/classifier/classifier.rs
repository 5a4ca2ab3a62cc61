use std::sync::Arc;

use ort::session::Session;
use tokenizers::Tokenizer;

use super::encoding::TextEncoder;
use super::error::ClassifierError;
use crate::labels::Category;
use crate::models::ModelCharacteristics;

/// A thread-safe classifier over the fixed seven-category label set.
///
/// Both artifacts are loaded once at construction and shared read-only
/// behind `Arc`, so one instance can serve concurrent requests without
/// locking:
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use amygdala::Classifier;
/// use std::sync::Arc;
///
/// let classifier = Arc::new(
///     Classifier::builder()
///         .with_artifacts("model.onnx", "tokenizer.json", None)?
///         .build()?,
/// );
///
/// let prediction = classifier.predict("I feel hopeless")?;
/// println!("{} -> {}", prediction.category, prediction.index);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Classifier {
    pub model_path: String,
    pub tokenizer_path: String,
    pub(crate) tokenizer: Arc<Tokenizer>,
    pub(crate) session: Arc<Session>,
    pub(crate) characteristics: ModelCharacteristics,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

/// One classification outcome: the winning category, its class index, and
/// the raw logit it won with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub category: Category,
    pub index: usize,
    pub score: f32,
}

impl TextEncoder for Classifier {
    fn tokenizer(&self) -> Option<&Tokenizer> {
        Some(&self.tokenizer)
    }

    fn session(&self) -> Option<&Session> {
        Some(&self.session)
    }

    fn max_sequence_length(&self) -> Option<usize> {
        Some(self.characteristics.max_sequence_length)
    }
}

impl Classifier {
    /// Creates a new builder for fluent construction.
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the loaded artifacts and label set.
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            tokenizer_path: self.tokenizer_path.clone(),
            num_labels: self.characteristics.num_labels,
            labels: Category::ALL.iter().map(|c| c.as_str()).collect(),
            max_sequence_length: self.characteristics.max_sequence_length,
        }
    }

    /// Predicts the category of `text`.
    ///
    /// Encodes the text with the pre-fitted transform, runs the graph, and
    /// takes the argmax over the seven logits. A class index outside the
    /// trained label set is a contract violation by the artifact and comes
    /// back as [`ClassifierError::Inference`].
    pub fn predict(&self, text: &str) -> Result<Prediction, ClassifierError> {
        if text.trim().is_empty() {
            return Err(ClassifierError::InvalidInput(
                "input text cannot be empty".into(),
            ));
        }

        let tokens = self.encode(text)?;
        let logits = self.logits(&tokens)?;

        if logits.len() != self.characteristics.num_labels {
            return Err(ClassifierError::Inference(format!(
                "classifier produced {} logits, expected {}",
                logits.len(),
                self.characteristics.num_labels
            )));
        }

        let (index, score) = logits
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, &s)| (i, s))
            .ok_or_else(|| ClassifierError::Inference("classifier produced no logits".into()))?;

        let category = Category::from_index(index).ok_or_else(|| {
            ClassifierError::Inference(format!(
                "class index {} is outside the known label set",
                index
            ))
        })?;

        log::debug!(
            "predicted '{}' (index {}, logit {:.4})",
            category,
            index,
            score
        );

        Ok(Prediction {
            category,
            index,
            score,
        })
    }
}
