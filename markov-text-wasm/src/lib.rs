//! WASM bindings for markov-text — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use markov_text::core::pipeline::TextGenerator;
use markov_text::schema::config::GeneratorConfig;

// ---------------------------------------------------------------------------
// Embedded sample text — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const FABLES: &str = include_str!("../../texts/fables.txt");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct TableInfo {
    order: usize,
    contexts: usize,
    successors: usize,
}

#[derive(serde::Serialize)]
struct StatsInfo {
    corpus_tokens: usize,
    output_length: usize,
    trigrams_enabled: bool,
    tables: Vec<TableInfo>,
}

/// Parse a JSON config; an empty string means defaults.
fn parse_config(config_json: &str) -> Result<GeneratorConfig, JsError> {
    if config_json.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }
    serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config JSON: {e}")))
}

fn build_generator(
    corpus: &str,
    config: GeneratorConfig,
    seed: u64,
) -> Result<TextGenerator, JsError> {
    TextGenerator::builder()
        .with_corpus_text(corpus)
        .with_config(config)
        .seed(seed)
        .build()
        .map_err(|e| JsError::new(&format!("Generator build error: {e}")))
}

// ---------------------------------------------------------------------------
// MarkovDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct MarkovDemo {
    generator: TextGenerator,
    corpus: String,
}

#[wasm_bindgen]
impl MarkovDemo {
    /// Create a demo trained on the bundled fables with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<MarkovDemo, JsError> {
        Self::from_corpus(data::FABLES, seed, "")
    }

    /// Create a demo trained on caller-supplied text.
    ///
    /// Expected config JSON shape (all fields optional):
    /// ```json
    /// { "output_length": 60, "trigrams_enabled": false }
    /// ```
    pub fn from_corpus(corpus: &str, seed: u64, config_json: &str) -> Result<MarkovDemo, JsError> {
        let config = parse_config(config_json)?;
        Ok(MarkovDemo {
            generator: build_generator(corpus, config, seed)?,
            corpus: corpus.to_string(),
        })
    }

    /// Generate one rendered passage.
    pub fn generate(&mut self) -> String {
        self.generator.generate()
    }

    /// Return a JSON description of the trained model.
    pub fn stats(&self) -> Result<String, JsError> {
        let stats = self.generator.model().stats();
        let config = self.generator.config();
        let info = StatsInfo {
            corpus_tokens: stats.corpus_tokens,
            output_length: config.output_length,
            trigrams_enabled: config.trigrams_enabled,
            tables: stats
                .tables
                .iter()
                .map(|t| TableInfo {
                    order: t.order,
                    contexts: t.contexts,
                    successors: t.successors,
                })
                .collect(),
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Restart the random source with a new seed (same model).
    pub fn reset(&mut self, seed: u64) {
        self.generator.reseed(seed);
    }

    /// Retrain on the same text with a new configuration.
    pub fn reconfigure(&mut self, config_json: &str, seed: u64) -> Result<(), JsError> {
        let config = parse_config(config_json)?;
        self.generator = build_generator(&self.corpus, config, seed)?;
        Ok(())
    }
}
