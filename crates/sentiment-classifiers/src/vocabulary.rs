//! Fitted vocabulary mapping (word index) and its tokenization rule
//!
//! The on-disk format is the JSON document written by a fitted Keras-style
//! `Tokenizer.to_json()`. Only the fields needed to reproduce
//! `texts_to_sequences` are read; counts and document statistics are ignored.

use sentiment_core::{ArtifactKind, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Characters stripped from text before splitting (Keras default)
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Frozen token → index table plus the rule used to split text into tokens
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
    num_words: Option<usize>,
    filters: String,
    lower: bool,
    split: String,
    char_level: bool,
    oov_index: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TokenizerDocument {
    #[serde(default)]
    class_name: Option<String>,
    config: TokenizerConfig,
}

#[derive(Debug, Deserialize)]
struct TokenizerConfig {
    #[serde(default)]
    num_words: Option<usize>,

    #[serde(default = "default_filters")]
    filters: String,

    #[serde(default = "default_true")]
    lower: bool,

    #[serde(default = "default_split")]
    split: String,

    #[serde(default)]
    char_level: bool,

    #[serde(default)]
    oov_token: Option<String>,

    word_index: WordIndexField,
}

/// Keras stores `word_index` as a JSON string nested inside the document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordIndexField {
    Encoded(String),
    Table(HashMap<String, u32>),
}

fn default_filters() -> String {
    DEFAULT_FILTERS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

impl Vocabulary {
    /// Build a word-level vocabulary with default Keras settings
    pub fn from_word_index(word_index: HashMap<String, u32>) -> Self {
        Self {
            word_index,
            num_words: None,
            filters: default_filters(),
            lower: true,
            split: default_split(),
            char_level: false,
            oov_index: None,
        }
    }

    /// Map unknown tokens to the index of `token` instead of dropping them.
    ///
    /// Has no effect when `token` itself is not in the table.
    pub fn with_oov_token(mut self, token: &str) -> Self {
        self.oov_index = self.word_index.get(token).copied();
        self
    }

    /// Only keep indices below `num_words`
    pub fn with_num_words(mut self, num_words: usize) -> Self {
        self.num_words = Some(num_words);
        self
    }

    /// Tokenize per character instead of per word
    pub fn with_char_level(mut self, char_level: bool) -> Self {
        self.char_level = char_level;
        self
    }

    /// Load a vocabulary document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::artifact_load(ArtifactKind::Tokenizer, e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse a vocabulary document
    pub fn from_json(json: &str) -> Result<Self> {
        let load_error = |msg: String| Error::artifact_load(ArtifactKind::Tokenizer, msg);

        let document: TokenizerDocument =
            serde_json::from_str(json).map_err(|e| load_error(e.to_string()))?;

        if let Some(class_name) = &document.class_name {
            if class_name != "Tokenizer" {
                return Err(load_error(format!(
                    "unsupported tokenizer class '{}'",
                    class_name
                )));
            }
        }

        let config = document.config;
        if config.split.is_empty() {
            return Err(load_error("split string must not be empty".to_string()));
        }

        let word_index = match config.word_index {
            WordIndexField::Table(table) => table,
            WordIndexField::Encoded(encoded) => serde_json::from_str(&encoded)
                .map_err(|e| load_error(format!("invalid word_index: {}", e)))?,
        };

        let oov_index = config
            .oov_token
            .as_ref()
            .and_then(|token| word_index.get(token).copied());

        Ok(Self {
            word_index,
            // Keras treats num_words=0 the same as no cap
            num_words: config.num_words.filter(|&n| n > 0),
            filters: config.filters,
            lower: config.lower,
            split: config.split,
            char_level: config.char_level,
            oov_index,
        })
    }

    /// Number of entries in the word index
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }

    /// Index of a single token, if present
    pub fn index_of(&self, token: &str) -> Option<u32> {
        self.word_index.get(token).copied()
    }

    /// Split text into tokens following the fitted rule
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if self.char_level {
            return text.chars().map(|c| c.to_string()).collect();
        }

        let mut cleaned = String::with_capacity(text.len());
        for c in text.chars() {
            if self.filters.contains(c) {
                cleaned.push_str(&self.split);
            } else {
                cleaned.push(c);
            }
        }

        cleaned
            .split(self.split.as_str())
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Convert text to a variable-length index sequence.
    ///
    /// Unknown tokens and tokens beyond `num_words` map to the OOV index when
    /// one is configured and are dropped otherwise.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.tokenize(text)
            .iter()
            .filter_map(|token| match self.word_index.get(token) {
                Some(&idx) => match self.num_words {
                    Some(limit) if idx as usize >= limit => self.oov_index,
                    _ => Some(idx),
                },
                None => self.oov_index,
            })
            .collect()
    }
}
