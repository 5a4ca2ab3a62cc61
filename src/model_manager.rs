//! Fetching, caching, and verifying the classifier artifacts.
//!
//! Artifacts live under a per-model subdirectory of the cache dir as
//! `model.onnx` and `tokenizer.json`. Every download is verified against the
//! catalog's SHA-256 hashes; a file that fails verification is re-fetched.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::models::BundledModel;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not downloaded: {0}")]
    NotDownloaded(String),
    #[error("download error: {0}")]
    Download(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("artifact verification failed")]
    VerificationFailed,
    #[error("hash mismatch for {file_type} file: expected {expected}, got {actual}")]
    HashMismatch {
        file_type: String,
        expected: String,
        actual: String,
    },
}

/// Resolves artifact paths and keeps the on-disk cache consistent.
#[derive(Clone)]
pub struct ModelManager {
    models_dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl ModelManager {
    /// Creates a manager over the default cache location.
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::default_models_dir())
    }

    /// Default cache location: `AMYGDALA_CACHE` override, then the platform
    /// cache directory, then the home directory, then the system temp dir.
    pub fn default_models_dir() -> PathBuf {
        if let Ok(path) = env::var("AMYGDALA_CACHE") {
            return PathBuf::from(path).join("models");
        }

        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("amygdala").join("models");
        }

        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("amygdala").join("models");
        }

        env::temp_dir().join("amygdala").join("models")
    }

    pub fn new<P: AsRef<Path>>(models_dir: P) -> io::Result<Self> {
        let models_dir = models_dir.as_ref().to_path_buf();
        fs::create_dir_all(&models_dir)?;
        Ok(Self {
            models_dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn model_path(&self, model: BundledModel) -> PathBuf {
        self.models_dir.join(model.info().name).join("model.onnx")
    }

    pub fn tokenizer_path(&self, model: BundledModel) -> PathBuf {
        self.models_dir
            .join(model.info().name)
            .join("tokenizer.json")
    }

    pub fn is_downloaded(&self, model: BundledModel) -> bool {
        self.model_path(model).exists() && self.tokenizer_path(model).exists()
    }

    /// Downloads both artifacts, verifying each against its catalog hash.
    /// Existing files that verify cleanly are left alone; anything that
    /// fails verification is re-fetched. On any failure the partial
    /// download is removed.
    pub async fn download(&self, model: BundledModel) -> Result<(), ModelError> {
        let info = model.info();
        let _lock = self.download_lock.lock().await;

        let model_dir = self.models_dir.join(info.name);
        fs::create_dir_all(&model_dir)?;

        let model_path = self.model_path(model);
        let model_result = if model_path.exists() && self.verify_file(&model_path, info.model_hash)? {
            log::info!("existing model artifact verified at {:?}", model_path);
            Ok(())
        } else {
            self.fetch_and_verify(info.model_url, &model_path, info.model_hash, "model")
                .await
        };

        let tokenizer_path = self.tokenizer_path(model);
        let tokenizer_result =
            if tokenizer_path.exists() && self.verify_file(&tokenizer_path, info.tokenizer_hash)? {
                log::info!("existing tokenizer artifact verified at {:?}", tokenizer_path);
                Ok(())
            } else {
                self.fetch_and_verify(
                    info.tokenizer_url,
                    &tokenizer_path,
                    info.tokenizer_hash,
                    "tokenizer",
                )
                .await
            };

        match (model_result, tokenizer_result) {
            (Ok(()), Ok(())) => {
                log::info!("artifact set '{}' ready", info.name);
                Ok(())
            }
            (Err(e), _) | (_, Err(e)) => {
                log::error!("artifact download failed: {}", e);
                let _ = self.remove_download(model);
                Err(e)
            }
        }
    }

    fn verify_file(&self, path: &Path, expected_hash: &str) -> Result<bool, ModelError> {
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());
        Ok(hash == expected_hash)
    }

    /// Checks both artifacts exist on disk and match their catalog hashes.
    pub fn verify(&self, model: BundledModel) -> Result<bool, ModelError> {
        let info = model.info();
        let model_path = self.model_path(model);
        let tokenizer_path = self.tokenizer_path(model);

        if !model_path.exists() || !tokenizer_path.exists() {
            return Ok(false);
        }

        let model_ok = self.verify_file(&model_path, info.model_hash)?;
        let tokenizer_ok = self.verify_file(&tokenizer_path, info.tokenizer_hash)?;
        Ok(model_ok && tokenizer_ok)
    }

    async fn fetch_and_verify(
        &self,
        url: &str,
        path: &Path,
        expected_hash: &str,
        file_type: &str,
    ) -> Result<(), ModelError> {
        log::info!("downloading {} artifact from {}", file_type, url);
        let response = reqwest::get(url).await?;
        let bytes = response.bytes().await?;
        log::info!("downloaded {} bytes", bytes.len());

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());

        if hash != expected_hash {
            return Err(ModelError::HashMismatch {
                file_type: file_type.to_string(),
                expected: expected_hash.to_string(),
                actual: hash,
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;

        if !self.verify_file(path, expected_hash)? {
            return Err(ModelError::VerificationFailed);
        }

        log::info!("{} artifact downloaded and verified", file_type);
        Ok(())
    }

    pub fn remove_download(&self, model: BundledModel) -> Result<(), ModelError> {
        let model_path = self.model_path(model);
        let tokenizer_path = self.tokenizer_path(model);

        if model_path.exists() {
            fs::remove_file(&model_path)?;
        }
        if tokenizer_path.exists() {
            fs::remove_file(&tokenizer_path)?;
        }
        Ok(())
    }

    /// Downloads the artifact set if missing; re-downloads it if the
    /// on-disk copy no longer verifies.
    pub async fn ensure_downloaded(&self, model: BundledModel) -> Result<(), ModelError> {
        if !self.is_downloaded(model) {
            log::info!("artifact set missing, downloading");
            self.download(model).await?;
        } else if !self.verify(model)? {
            log::warn!("artifact verification failed, re-downloading");
            self.remove_download(model)?;
            self.download(model).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_honors_env_override() {
        env::set_var("AMYGDALA_CACHE", "/tmp/amygdala-test-cache");
        let path = ModelManager::default_models_dir();
        assert!(path
            .to_str()
            .unwrap()
            .contains("/tmp/amygdala-test-cache/models"));
        env::remove_var("AMYGDALA_CACHE");

        let path = ModelManager::default_models_dir();
        assert!(path.to_str().unwrap().contains("amygdala"));
    }

    #[test]
    fn artifact_paths_live_under_the_model_name() {
        let manager = ModelManager::new("/tmp/amygdala-test-paths").unwrap();
        let model = BundledModel::MentalMiniLM;
        assert!(manager
            .model_path(model)
            .ends_with("minilm-mental-health/model.onnx"));
        assert!(manager
            .tokenizer_path(model)
            .ends_with("minilm-mental-health/tokenizer.json"));
    }

    #[test]
    fn empty_cache_reports_not_downloaded() {
        let dir = env::temp_dir().join("amygdala-test-empty-cache");
        let _ = fs::remove_dir_all(&dir);
        let manager = ModelManager::new(&dir).unwrap();
        assert!(!manager.is_downloaded(BundledModel::MentalMiniLM));
        assert!(!manager.verify(BundledModel::MentalMiniLM).unwrap());
    }
}
