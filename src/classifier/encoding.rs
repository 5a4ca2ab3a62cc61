use ndarray::{Array1, Array2};
use ort::session::Session;
use ort::value::Tensor;
use std::collections::HashMap;
use tokenizers::Tokenizer;

use super::error::ClassifierError;

/// Text-to-logits plumbing shared by the classifier and its builder.
///
/// The pipeline is the opaque-artifact contract end to end:
/// 1. The tokenizer turns raw text into the numeric feature representation
///    (token ids plus attention mask).
/// 2. The ONNX graph maps those features to one logit per trained class.
///
/// The graph is expected to:
/// - Accept `input_ids` and `attention_mask`, both `[batch_size, seq_len]`
/// - Output logits of shape `[batch_size, num_labels]`
pub(crate) trait TextEncoder {
    fn tokenizer(&self) -> Option<&Tokenizer>;

    fn session(&self) -> Option<&Session>;

    fn max_sequence_length(&self) -> Option<usize>;

    /// Counts tokens without running the graph. Useful for rejecting
    /// oversized input cheaply.
    fn count_tokens(&self, text: &str) -> Result<usize, ClassifierError> {
        let tokenizer = self
            .tokenizer()
            .ok_or_else(|| ClassifierError::Tokenizer("tokenizer not initialized".into()))?;

        tokenizer
            .encode(text, false)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))
            .map(|encoding| encoding.get_ids().len())
    }

    /// Runs the pre-fitted transform: text to token ids, bounded by the
    /// model's maximum sequence length.
    fn encode(&self, text: &str) -> Result<Vec<u32>, ClassifierError> {
        let tokenizer = self
            .tokenizer()
            .ok_or_else(|| ClassifierError::Tokenizer("tokenizer not initialized".into()))?;
        let max_length = self
            .max_sequence_length()
            .ok_or_else(|| ClassifierError::Tokenizer("max sequence length not set".into()))?;

        let encoding = tokenizer
            .encode(text, false)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        let token_ids = encoding.get_ids();

        if token_ids.len() > max_length {
            return Err(ClassifierError::InvalidInput(format!(
                "input text too long: {} tokens (max: {})",
                token_ids.len(),
                max_length
            )));
        }

        let safe_tokens: Result<Vec<u32>, _> =
            token_ids.iter().map(|&id| u32::try_from(id)).collect();

        safe_tokens.map_err(|_| ClassifierError::Tokenizer("invalid token id encountered".into()))
    }

    /// Runs the graph over one encoded input and returns its logits vector.
    fn logits(&self, tokens: &[u32]) -> Result<Array1<f32>, ClassifierError> {
        let session = self
            .session()
            .ok_or_else(|| ClassifierError::Model("session not initialized".into()))?;

        let input_array = Array2::from_shape_vec(
            (1, tokens.len()),
            tokens.iter().map(|&x| x as i64).collect(),
        )
        .map_err(|e| ClassifierError::Model(format!("failed to create input array: {}", e)))?;
        let input_dyn = input_array.into_dyn();
        let input_ids = input_dyn.as_standard_layout();

        let mask_array = Array2::from_shape_vec(
            (1, tokens.len()),
            tokens
                .iter()
                .map(|&x| if x == 0 { 0i64 } else { 1i64 })
                .collect(),
        )
        .map_err(|e| ClassifierError::Model(format!("failed to create mask array: {}", e)))?;
        let mask_dyn = mask_array.into_dyn();
        let attention_mask = mask_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            "input_ids",
            Tensor::from_array(&input_ids)
                .map_err(|e| ClassifierError::Model(format!("failed to create input tensor: {}", e)))?,
        );
        input_tensors.insert(
            "attention_mask",
            Tensor::from_array(&attention_mask)
                .map_err(|e| ClassifierError::Model(format!("failed to create mask tensor: {}", e)))?,
        );

        let outputs = session
            .run(input_tensors)
            .map_err(|e| ClassifierError::Model(format!("failed to run model: {}", e)))?;
        let output_tensor = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Model(format!("failed to extract output tensor: {}", e)))?;

        let shape = output_tensor.shape().to_vec();
        if shape.len() != 2 {
            return Err(ClassifierError::Model(format!(
                "unexpected output shape {:?}, expected [batch, num_labels]",
                shape
            )));
        }

        let logits_slice = output_tensor.slice(ndarray::s![0, ..]);
        Ok(Array1::from_iter(logits_slice.iter().cloned()))
    }
}
