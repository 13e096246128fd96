//! Text normalization pipeline.
//!
//! A [`Normalizer`] turns free text into a canonical string of space-joined
//! lemmas: lowercase, tokenize, keep alphabetic non-stop-word tokens, replace
//! each with its lemma. It is built once at startup and shared read-only
//! across all request handling.
//!
//! If the configured language model is not recognized the service degrades to
//! a blank pipeline (tokenization only, no stop-word data, no lemmatization)
//! instead of failing startup.

use crate::text::lemmatizer::Lemmatizer;
use crate::text::stopwords::is_stop_word;
use crate::text::tokenizer::tokenize;
use std::fmt;

/// Language model names that select the full English pipeline.
const ENGLISH_MODELS: &[&str] = &["en_core_web_sm", "en_core_web_md", "en_core_web_lg", "en"];

/// Error returned when the requested language model is not available.
#[derive(Debug)]
pub struct ModelError {
    model: String,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language model '{}'", self.model)
    }
}

impl std::error::Error for ModelError {}

enum Pipeline {
    /// Stop-word filtering + lemmatization.
    Full(Lemmatizer),
    /// Tokenization only; near-identity lowercasing.
    Blank,
}

/// Text normalizer shared across all request handling.
pub struct Normalizer {
    pipeline: Pipeline,
}

impl Normalizer {
    /// Load the pipeline for a language model name.
    ///
    /// Recognized English model names get the full pipeline; anything else is
    /// an error so the caller can decide to fall back to [`Normalizer::blank`].
    pub fn load(model: &str) -> Result<Self, ModelError> {
        if ENGLISH_MODELS.contains(&model) {
            Ok(Self {
                pipeline: Pipeline::Full(Lemmatizer::new()),
            })
        } else {
            Err(ModelError {
                model: model.to_string(),
            })
        }
    }

    /// A minimal pipeline with no stop-word data and no lemmatizer.
    pub fn blank() -> Self {
        Self {
            pipeline: Pipeline::Blank,
        }
    }

    /// Returns `true` when running the degraded tokenize-only pipeline.
    pub fn is_blank(&self) -> bool {
        matches!(self.pipeline, Pipeline::Blank)
    }

    /// Normalize text to a string of space-joined lemmas.
    ///
    /// Tokens must be fully alphabetic to survive; the full pipeline also
    /// drops stop words and lemmatizes. If nothing survives filtering (all
    /// punctuation, digits, or stop words) the lowercased original text is
    /// returned verbatim, never an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let tokens = tokenize(text);
        let kept: Vec<String> = match &self.pipeline {
            Pipeline::Full(lemmatizer) => tokens
                .iter()
                .filter(|t| is_alphabetic(t) && !is_stop_word(t))
                .map(|t| lemmatizer.lemma(t))
                .collect(),
            Pipeline::Blank => tokens
                .iter()
                .filter(|t| is_alphabetic(t))
                .map(str::to_string)
                .collect(),
        };

        if kept.is_empty() {
            text.to_lowercase()
        } else {
            kept.join(" ")
        }
    }
}

/// Whole-token alphabetic check: tokens with digits carry no lemma.
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Normalizer {
        Normalizer::load("en_core_web_sm").expect("known model")
    }

    #[test]
    fn load_recognizes_english_models() {
        assert!(Normalizer::load("en_core_web_sm").is_ok());
        assert!(Normalizer::load("en").is_ok());
        assert!(Normalizer::load("fr_core_news_sm").is_err());
        assert!(Normalizer::load("").is_err());
    }

    #[test]
    fn full_pipeline_lemmatizes_and_drops_stop_words() {
        let normalizer = full();
        assert_eq!(
            normalizer.normalize("Found the lost backpacks"),
            "lose backpack"
        );
        assert_eq!(normalizer.normalize("lost blue backpack"), "lose blue backpack");
    }

    #[test]
    fn numeric_tokens_are_dropped() {
        let normalizer = full();
        assert_eq!(normalizer.normalize("room 101 keys"), "room key");
    }

    #[test]
    fn accented_text_survives_the_full_pipeline() {
        let normalizer = full();
        assert_eq!(normalizer.normalize("Café saééed"), "café saé");
    }

    #[test]
    fn falls_back_to_lowercased_original() {
        let normalizer = full();
        // All punctuation/digits: nothing survives filtering
        assert_eq!(normalizer.normalize("12345 !!!"), "12345 !!!");
        // All stop words
        assert_eq!(normalizer.normalize("The And If"), "the and if");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn blank_pipeline_is_near_identity() {
        let normalizer = Normalizer::blank();
        assert!(normalizer.is_blank());
        // Keeps stop words and inflections, still lowercases and strips punctuation
        assert_eq!(
            normalizer.normalize("Found the lost backpacks!"),
            "found the lost backpacks"
        );
    }

    #[test]
    fn blank_pipeline_fallback_still_applies() {
        let normalizer = Normalizer::blank();
        assert_eq!(normalizer.normalize("12345"), "12345");
    }
}
