//! Catalog of the bundled classifier artifact sets.
//!
//! Each bundled model is a pair of externally produced, opaque artifacts: a
//! pre-fitted tokenizer (the text-to-features transform) and a pre-trained
//! ONNX classification graph. Both are treated as black boxes; this module
//! only records where they live and what shape they promise.

/// A classifier artifact set shipped with the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundledModel {
    /// MiniLM fine-tuned on mental-health statements, seven output classes.
    MentalMiniLM,
}

/// Download locations and content hashes for one artifact set.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: &'static str,
    pub model_url: &'static str,
    pub tokenizer_url: &'static str,
    pub model_hash: &'static str,
    pub tokenizer_hash: &'static str,
}

/// Fixed properties of an artifact set the inference path relies on.
#[derive(Debug, Clone)]
pub struct ModelCharacteristics {
    /// Width of the output logits vector.
    pub num_labels: usize,
    /// Longest input, in tokens, the graph accepts.
    pub max_sequence_length: usize,
    pub model_size_mb: usize,
}

impl BundledModel {
    pub fn info(self) -> ModelInfo {
        match self {
            BundledModel::MentalMiniLM => ModelInfo {
                name: "minilm-mental-health",
                model_url: "https://huggingface.co/amygdala-ai/minilm-mental-health/resolve/main/model.onnx",
                tokenizer_url: "https://huggingface.co/amygdala-ai/minilm-mental-health/resolve/main/tokenizer.json",
                model_hash: "f099484f80c9051f3d2778c5f61e58381edfbb702efdbf82bc72dbae723863b5",
                tokenizer_hash: "7d9bb93c86a6a25c8caec837072b6b56b9be2df958eacdde39b5dc19e17603ff",
            },
        }
    }

    pub fn characteristics(self) -> ModelCharacteristics {
        match self {
            BundledModel::MentalMiniLM => ModelCharacteristics {
                num_labels: 7,
                max_sequence_length: 256,
                model_size_mb: 91,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Category;

    #[test]
    fn bundled_model_matches_label_set() {
        let characteristics = BundledModel::MentalMiniLM.characteristics();
        assert_eq!(characteristics.num_labels, Category::ALL.len());
    }

    #[test]
    fn bundled_model_names_both_artifacts() {
        let info = BundledModel::MentalMiniLM.info();
        assert!(info.model_url.ends_with("model.onnx"));
        assert!(info.tokenizer_url.ends_with("tokenizer.json"));
        assert_eq!(info.model_hash.len(), 64);
        assert_eq!(info.tokenizer_hash.len(), 64);
    }
}
