/// The text generation pipeline: corpus → model → tokens → rendered text.
///
/// Wires together corpus loading, model training, the generator, and the
/// renderer behind a single `generate()` call.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;

use crate::core::corpus::{load_training_text, CorpusError};
use crate::core::generator::{generate_sequence, generate_traced, GeneratedSequence};
use crate::core::ngram::{ModelError, NGramModel};
use crate::core::render::render;
use crate::core::sampler::IndexSampler;
use crate::schema::config::{ConfigError, GeneratorConfig};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
    #[error("no training text provided (set corpus_text or texts_dir)")]
    NoCorpus,
}

/// A trained generator. Built via `TextGenerator::builder()`.
pub struct TextGenerator {
    model: NGramModel,
    config: GeneratorConfig,
    rng: StdRng,
    generation_count: u64,
}

/// Builder for constructing a `TextGenerator`.
pub struct TextGeneratorBuilder {
    texts_dir: Option<String>,
    config_path: Option<String>,
    seed: Option<u64>,
    output_length: Option<usize>,
    trigrams_enabled: Option<bool>,
    /// Directly provided training text (for testing without files).
    corpus_text: Option<String>,
    /// Directly provided configuration (for testing without files).
    config: Option<GeneratorConfig>,
}

impl TextGenerator {
    pub fn builder() -> TextGeneratorBuilder {
        TextGeneratorBuilder {
            texts_dir: None,
            config_path: None,
            seed: None,
            output_length: None,
            trigrams_enabled: None,
            corpus_text: None,
            config: None,
        }
    }

    /// Generate and render one passage of `output_length + 1` words.
    pub fn generate(&mut self) -> String {
        let tokens = generate_sequence(&self.model, self.config.output_length, &mut self.rng);
        self.generation_count += 1;
        render(tokens)
    }

    /// Generate with a caller-supplied sampler instead of the internal rng.
    pub fn generate_with<S>(&self, sampler: &mut S) -> String
    where
        S: IndexSampler + ?Sized,
    {
        render(generate_sequence(&self.model, self.config.output_length, sampler))
    }

    /// Generate raw tokens with the tier that produced each, unrendered.
    pub fn generate_traced(&mut self) -> GeneratedSequence {
        self.generation_count += 1;
        generate_traced(&self.model, self.config.output_length, &mut self.rng)
    }

    /// Restart the internal rng from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn model(&self) -> &NGramModel {
        &self.model
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of passages generated with the internal rng so far.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }
}

impl TextGeneratorBuilder {
    /// Train on every file in `path` (see `load_training_text`).
    pub fn texts_dir(mut self, path: &str) -> Self {
        self.texts_dir = Some(path.to_string());
        self
    }

    /// Read the configuration from a RON file.
    pub fn config_path(mut self, path: &str) -> Self {
        self.config_path = Some(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the configured output length.
    pub fn output_length(mut self, length: usize) -> Self {
        self.output_length = Some(length);
        self
    }

    /// Override the configured trigram toggle.
    pub fn trigrams_enabled(mut self, enabled: bool) -> Self {
        self.trigrams_enabled = Some(enabled);
        self
    }

    /// Provide training text directly (for testing without files).
    pub fn with_corpus_text(mut self, text: &str) -> Self {
        self.corpus_text = Some(text.to_string());
        self
    }

    /// Provide the configuration directly (for testing without files).
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<TextGenerator, PipelineError> {
        // Resolve configuration: direct > file > default, then overrides
        let mut config = match (self.config, &self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => GeneratorConfig::load_from_ron(Path::new(path))?,
            (None, None) => GeneratorConfig::default(),
        };
        if let Some(length) = self.output_length {
            config.output_length = length;
        }
        if let Some(enabled) = self.trigrams_enabled {
            config.trigrams_enabled = enabled;
        }
        config.validate()?;

        // Gather training text: directory first, then direct text
        let mut text = String::new();
        let mut has_source = false;
        if let Some(ref dir) = self.texts_dir {
            text.push_str(&load_training_text(Path::new(dir))?);
            has_source = true;
        }
        if let Some(ref direct) = self.corpus_text {
            text.push_str(direct);
            has_source = true;
        }
        if !has_source {
            return Err(PipelineError::NoCorpus);
        }

        let model = NGramModel::train(&text, config.trigrams_enabled)?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::debug!(
            "Generator ready: output_length={}, trigrams={}, seed={:?}",
            config.output_length,
            config.trigrams_enabled,
            self.seed
        );

        Ok(TextGenerator {
            model,
            config,
            rng,
            generation_count: 0,
        })
    }
}
