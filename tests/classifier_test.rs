use amygdala::{BundledModel, Category, Classifier, ClassifierError, ModelManager};

// Initialize test logger
fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .try_init();
}

#[test]
fn builder_rejects_missing_artifact_files() {
    init();
    let result = Classifier::builder().with_artifacts(
        "/nonexistent/model.onnx",
        "/nonexistent/tokenizer.json",
        None,
    );
    assert!(matches!(result, Err(ClassifierError::Build(_))));
}

#[test]
fn builder_rejects_empty_paths() {
    init();
    let result = Classifier::builder().with_artifacts("", "tokenizer.json", None);
    assert!(matches!(result, Err(ClassifierError::Build(_))));
}

#[test]
fn with_model_requires_a_downloaded_artifact_set() {
    init();
    let dir = std::env::temp_dir().join("amygdala-test-no-artifacts");
    let _ = std::fs::remove_dir_all(&dir);
    let manager = ModelManager::new(&dir).unwrap();

    let result = Classifier::builder().with_model(&manager, BundledModel::MentalMiniLM);
    assert!(matches!(result, Err(ClassifierError::Build(_))));
}

// End-to-end prediction against the real artifact set. Runs only when the
// artifacts are already present in the local cache; the suite stays
// hermetic otherwise.
#[test]
fn predicts_a_category_from_the_fixed_label_set() {
    init();
    let manager = match ModelManager::new_default() {
        Ok(manager) => manager,
        Err(_) => return,
    };
    let model = BundledModel::MentalMiniLM;
    if !manager.is_downloaded(model) {
        eprintln!("artifact set not present locally, skipping prediction test");
        return;
    }

    let classifier = Classifier::builder()
        .with_model(&manager, model)
        .unwrap()
        .build()
        .unwrap();

    let prediction = classifier.predict("I feel hopeless").unwrap();
    assert!(prediction.index < Category::ALL.len());
    assert_eq!(Category::from_index(prediction.index), Some(prediction.category));

    let info = classifier.info();
    assert_eq!(info.num_labels, 7);
    assert!(info.labels.contains(&prediction.category.as_str()));

    // Empty input is rejected before inference.
    let result = classifier.predict("   ");
    assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
}
