//! The classify-and-respond entry point.

use std::sync::Arc;

use log::info;

use super::selector::{RandomSelector, ResponseSelector};
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token_filter::{EnglishLemmatizer, Lemmatizer};
use crate::config::ChatbotConfig;
use crate::error::{ColloquyError, Result};
use crate::intent::registry::IntentRegistry;
use crate::ml::intent_classifier::{Classification, IntentClassifier, SimilarityMatcher};

/// An initialized chatbot.
///
/// Construction runs the whole one-time sequence (resource load, corpus
/// build, vocabulary fit), so a `Chatbot` value is always ready to serve.
/// It is `Send + Sync`; only the response selector holds mutable state.
pub struct Chatbot {
    registry: IntentRegistry,
    classifier: IntentClassifier,
    selector: Arc<dyn ResponseSelector>,
    config: ChatbotConfig,
}

impl std::fmt::Debug for Chatbot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chatbot")
            .field("intents", &self.registry.len())
            .field("classifier", &self.classifier)
            .field("selector", &self.selector.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Chatbot {
    /// Built-in intents, English lemmatizer, random responses, default config.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a chatbot.
    pub fn builder() -> ChatbotBuilder {
        ChatbotBuilder::default()
    }

    /// Run the one-time initialization sequence.
    ///
    /// Fails with [`ColloquyError::Configuration`] if the config is invalid
    /// or the registry has no patterns to fit, and with an I/O or JSON error
    /// if the lemma resources cannot be loaded.
    pub fn initialize(
        registry: IntentRegistry,
        lemmatizer: Arc<dyn Lemmatizer>,
        selector: Arc<dyn ResponseSelector>,
        config: ChatbotConfig,
    ) -> Result<Self> {
        config.validate()?;

        let normalizer = TextNormalizer::new(lemmatizer)?;
        normalizer.load_resources()?;

        let matcher = SimilarityMatcher::new(config.similarity_threshold);
        let classifier = IntentClassifier::train(&registry, normalizer, matcher)?;

        info!(
            "chatbot ready: {} intents, lemmatizer '{}', selector '{}'",
            registry.len(),
            classifier.normalizer().lemmatizer().name(),
            selector.name()
        );

        Ok(Chatbot {
            registry,
            classifier,
            selector,
            config,
        })
    }

    /// Respond to raw user text.
    ///
    /// Empty or all-whitespace input gets the configured prompt without
    /// classification. Everything else resolves to some intent's response.
    pub fn get_response(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(self.config.empty_input_prompt.clone());
        }

        let intent = self.classify_intent(text)?;
        let responses = self.registry.responses_for(&intent)?;
        self.selector
            .select(responses)
            .map(str::to_string)
            .ok_or_else(|| {
                ColloquyError::lookup(format!(
                    "selector '{}' picked no response among the {} of intent '{intent}'",
                    self.selector.name(),
                    responses.len()
                ))
            })
    }

    /// Identifier of the intent `text` classifies as.
    pub fn classify_intent(&self, text: &str) -> Result<String> {
        self.classifier.predict(text)
    }

    /// Full classification details for `text`.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        self.classifier.classify(text)
    }

    /// The intent registry.
    pub fn registry(&self) -> &IntentRegistry {
        &self.registry
    }

    /// The trained classifier.
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// The active configuration.
    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }
}

/// Builder for [`Chatbot`]. Unset parts fall back to the built-in registry,
/// the English lemmatizer and a random selector (seeded if the config has a
/// seed).
#[derive(Default)]
pub struct ChatbotBuilder {
    registry: Option<IntentRegistry>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
    selector: Option<Arc<dyn ResponseSelector>>,
    config: ChatbotConfig,
}

impl ChatbotBuilder {
    /// Use a custom intent registry.
    pub fn registry(mut self, registry: IntentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a custom lemma provider.
    pub fn lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    /// Use a custom response selector.
    pub fn selector(mut self, selector: Arc<dyn ResponseSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: ChatbotConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the default random selector.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the similarity threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Initialize the chatbot.
    pub fn build(self) -> Result<Chatbot> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => IntentRegistry::builtin()?,
        };
        let lemmatizer: Arc<dyn Lemmatizer> = match self.lemmatizer {
            Some(lemmatizer) => lemmatizer,
            None => Arc::new(EnglishLemmatizer::new()),
        };
        let selector: Arc<dyn ResponseSelector> = match (self.selector, self.config.seed) {
            (Some(selector), _) => selector,
            (None, Some(seed)) => Arc::new(RandomSelector::seeded(seed)),
            (None, None) => Arc::new(RandomSelector::new()),
        };

        Chatbot::initialize(registry, lemmatizer, selector, self.config)
    }
}
