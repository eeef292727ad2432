use crate::config::{DemoConfig, ThemeConfig};
use crate::server::PageRenderer;
use sentiment_classifiers::{ArtifactLoader, SentimentClassifier, SentimentPipeline};
use std::sync::Arc;

/// Shared application state.
///
/// Built once at startup; everything inside is read-only afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Encode → infer → threshold pipeline over the loaded artifacts
    pub pipeline: Arc<SentimentPipeline>,

    /// Startup load failures, shown on every page
    pub load_errors: Arc<Vec<String>>,

    /// Page appearance
    pub theme: Arc<ThemeConfig>,

    /// Compiled page template
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(
        pipeline: SentimentPipeline,
        load_errors: Vec<String>,
        theme: ThemeConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            pipeline: Arc::new(pipeline),
            load_errors: Arc::new(load_errors),
            theme: Arc::new(theme),
            pages: Arc::new(PageRenderer::new()?),
        })
    }

    /// Load both artifacts and assemble the pipeline described by `config`.
    ///
    /// Artifact failures are recorded, not returned; only invalid settings fail.
    pub fn from_config(config: &DemoConfig) -> anyhow::Result<Self> {
        let loader = ArtifactLoader::new(
            &config.artifacts.model_path,
            &config.artifacts.tokenizer_path,
        )
        .with_device(config.inference.device);
        let artifacts = loader.load();

        let classifier = SentimentClassifier::with_threshold(config.inference.threshold)?;
        let pipeline = SentimentPipeline::from_artifacts(&artifacts)
            .with_padding(config.inference.padding_config())
            .with_classifier(classifier);

        Self::new(pipeline, artifacts.error_messages(), config.theme.clone())
    }

    /// Both artifacts loaded
    pub fn is_ready(&self) -> bool {
        self.pipeline.has_model() && self.pipeline.has_vocabulary()
    }
}
