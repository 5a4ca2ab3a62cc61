use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use ort::session::Session;
use tokenizers::Tokenizer;

use super::classifier::Classifier;
use super::encoding::TextEncoder;
use super::error::ClassifierError;
use crate::labels::Category;
use crate::model_manager::ModelManager;
use crate::models::{BundledModel, ModelCharacteristics};
use crate::runtime::{create_session_builder, RuntimeConfig};

/// Builds a [`Classifier`] from a bundled or explicitly located artifact set.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    tokenizer_path: Option<String>,
    tokenizer: Option<Tokenizer>,
    session: Option<Session>,
    characteristics: Option<ModelCharacteristics>,
    runtime_config: RuntimeConfig,
}

impl TextEncoder for ClassifierBuilder {
    fn tokenizer(&self) -> Option<&Tokenizer> {
        self.tokenizer.as_ref()
    }

    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn max_sequence_length(&self) -> Option<usize> {
        self.characteristics.as_ref().map(|c| c.max_sequence_length)
    }
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides ONNX Runtime execution settings for the session.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads a bundled artifact set out of `manager`'s cache.
    ///
    /// The set must already be downloaded (see
    /// [`ModelManager::ensure_downloaded`]); the builder refuses to reach
    /// out to the network itself.
    pub fn with_model(
        self,
        manager: &ModelManager,
        model: BundledModel,
    ) -> Result<Self, ClassifierError> {
        if self.model_path.is_some() || self.tokenizer_path.is_some() {
            return Err(ClassifierError::Build(
                "model and tokenizer paths already set".to_string(),
            ));
        }

        if !manager.is_downloaded(model) {
            return Err(ClassifierError::Build(format!(
                "artifact set '{}' is not downloaded; fetch it first with ModelManager::ensure_downloaded()",
                model.info().name
            )));
        }

        let model_path = manager.model_path(model);
        let tokenizer_path = manager.tokenizer_path(model);
        let mut builder = self.load_artifacts(&model_path, &tokenizer_path)?;
        builder.characteristics = Some(model.characteristics());
        Ok(builder)
    }

    /// Loads an artifact set from explicit file paths.
    ///
    /// The number of trained classes is probed by running one throwaway
    /// input through the graph, so a graph trained on the wrong label set
    /// is rejected at build time rather than per request.
    pub fn with_artifacts(
        self,
        model_path: impl AsRef<Path>,
        tokenizer_path: impl AsRef<Path>,
        max_sequence_length: Option<usize>,
    ) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if model_path.as_os_str().is_empty() || tokenizer_path.as_os_str().is_empty() {
            return Err(ClassifierError::Build(
                "model and tokenizer paths cannot be empty".to_string(),
            ));
        }
        if self.model_path.is_some() || self.tokenizer_path.is_some() {
            return Err(ClassifierError::Build(
                "model and tokenizer paths already set".to_string(),
            ));
        }
        if !model_path.exists() {
            return Err(ClassifierError::Build(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(ClassifierError::Build(format!(
                "tokenizer file not found: {}",
                tokenizer_path.display()
            )));
        }

        let mut builder = self.load_artifacts(model_path, tokenizer_path)?;

        // Probe the graph with a throwaway input to learn its output width.
        builder.characteristics = Some(ModelCharacteristics {
            num_labels: 0,
            max_sequence_length: max_sequence_length.unwrap_or(256),
            model_size_mb: 0,
        });
        let probe = builder.encode("probe input")?;
        let logits = builder.logits(&probe)?;
        info!("probed classifier output width: {}", logits.len());

        builder.characteristics = Some(ModelCharacteristics {
            num_labels: logits.len(),
            max_sequence_length: max_sequence_length.unwrap_or(256),
            model_size_mb: 0,
        });
        Ok(builder)
    }

    fn load_artifacts(
        mut self,
        model_path: &Path,
        tokenizer_path: &Path,
    ) -> Result<Self, ClassifierError> {
        let tokenizer = Tokenizer::from_file(tokenizer_path).map_err(|e| {
            error!("failed to load tokenizer: {}", e);
            ClassifierError::Build(format!("failed to load tokenizer: {}", e))
        })?;
        info!("tokenizer loaded from {}", tokenizer_path.display());

        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(model_path)?;

        Self::validate_model(&session)?;
        info!("model structure validated");

        self.model_path = Some(model_path.to_string_lossy().to_string());
        self.tokenizer_path = Some(tokenizer_path.to_string_lossy().to_string());
        self.tokenizer = Some(tokenizer);
        self.session = Some(session);
        Ok(self)
    }

    /// Builds the final [`Classifier`].
    ///
    /// Fails if no artifacts were loaded, or if the graph's output width
    /// does not match the fixed seven-category label set.
    pub fn build(mut self) -> Result<Classifier, ClassifierError> {
        if self.model_path.is_none() || self.tokenizer_path.is_none() {
            return Err(ClassifierError::Build(
                "model and tokenizer paths must be set".to_string(),
            ));
        }

        let characteristics = self
            .characteristics
            .take()
            .ok_or_else(|| ClassifierError::Build("model characteristics not set".to_string()))?;

        if characteristics.num_labels != Category::ALL.len() {
            return Err(ClassifierError::Build(format!(
                "classifier artifact predicts {} classes, expected {}",
                characteristics.num_labels,
                Category::ALL.len()
            )));
        }

        let tokenizer = Arc::new(
            self.tokenizer
                .take()
                .ok_or_else(|| ClassifierError::Build("no tokenizer loaded".into()))?,
        );
        let session = Arc::new(
            self.session
                .take()
                .ok_or_else(|| ClassifierError::Build("no ONNX model loaded".into()))?,
        );

        Ok(Classifier {
            model_path: self.model_path.take().unwrap(),
            tokenizer_path: self.tokenizer_path.take().unwrap(),
            tokenizer,
            session,
            characteristics,
        })
    }

    /// Checks the graph exposes the tensors the encoding path feeds.
    fn validate_model(session: &Session) -> Result<(), ClassifierError> {
        let inputs = &session.inputs;
        if inputs.len() < 2 {
            return Err(ClassifierError::Model(format!(
                "model must have at least 2 inputs (input_ids and attention_mask), found {}",
                inputs.len()
            )));
        }

        let outputs = &session.outputs;
        if outputs.is_empty() {
            return Err(ClassifierError::Model(
                "model must have at least 1 output for logits".to_string(),
            ));
        }

        Ok(())
    }
}
