//! Integration tests for file-backed registries, lemma tables and configs.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use colloquy::analysis::token_filter::{DictionaryLemmatizer, EnglishLemmatizer, Lemmatizer};
use colloquy::chat::{Chatbot, RoundRobinSelector};
use colloquy::config::ChatbotConfig;
use colloquy::error::{ColloquyError, Result};
use colloquy::intent::{Intent, IntentRegistry};

const SHOP_INTENTS: &str = r#"[
    {
        "id": "order",
        "patterns": ["i want to order a pizza", "order food", "place an order"],
        "responses": ["What would you like to order?", "Sure, what can I get you?"]
    },
    {
        "id": "status",
        "patterns": ["where is my order", "order status", "track my delivery"],
        "responses": ["Your order is on its way."]
    },
    {
        "id": "default",
        "responses": ["Sorry, I only handle orders."]
    }
]"#;

#[test]
fn test_registry_from_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("intents.json");
    fs::write(&path, SHOP_INTENTS)?;

    let registry = IntentRegistry::from_json_file(&path)?;
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.pattern_count(), 6);

    let bot = Chatbot::builder()
        .registry(registry)
        .selector(Arc::new(RoundRobinSelector::new()))
        .build()?;

    assert_eq!(bot.classify_intent("I want to order a pizza!")?, "order");
    assert_eq!(bot.classify_intent("track my delivery please")?, "status");
    assert_eq!(bot.classify_intent("tell me a joke")?, "default");

    assert_eq!(bot.get_response("order food")?, "What would you like to order?");
    assert_eq!(bot.get_response("order food")?, "Sure, what can I get you?");
    assert_eq!(bot.get_response("hello")?, "Sorry, I only handle orders.");

    Ok(())
}

#[test]
fn test_invalid_registries_are_rejected() {
    let missing_default = r#"[{"id": "a", "patterns": ["x y"], "responses": ["ok"]}]"#;
    assert!(matches!(
        IntentRegistry::from_json_str(missing_default),
        Err(ColloquyError::Configuration(_))
    ));

    let malformed = r#"[{"id": "a", "patterns": "#;
    assert!(matches!(
        IntentRegistry::from_json_str(malformed),
        Err(ColloquyError::Json(_))
    ));

    let missing_file = IntentRegistry::from_json_file("/nonexistent/intents.json");
    assert!(matches!(missing_file, Err(ColloquyError::Io(_))));
}

#[test]
fn test_registry_without_terms_fails_initialization() -> Result<()> {
    let registry = IntentRegistry::new(vec![
        Intent::new("punctuation", &["?!", "..."], &["Hmm."]),
        Intent::new("default", &[], &["Pardon?"]),
    ])?;

    let result = Chatbot::builder().registry(registry).build();
    assert!(matches!(result, Err(ColloquyError::Configuration(_))));

    Ok(())
}

#[test]
fn test_duplicate_patterns_across_intents_favor_first() -> Result<()> {
    let registry = IntentRegistry::new(vec![
        Intent::new("open", &["open the door"], &["Opening."]),
        Intent::new("door", &["open the door", "close the door"], &["Door."]),
        Intent::new("default", &[], &["Pardon?"]),
    ])?;
    let bot = Chatbot::builder().registry(registry).build()?;

    let classification = bot.classify("Open the door!")?;
    assert_eq!(classification.intent, "open");
    assert_eq!(classification.matched_index, Some(0));
    assert_eq!(classification.matched_pattern.as_deref(), Some("open the door"));

    Ok(())
}

#[test]
fn test_dictionary_lemmatizer_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lemmas.json");
    fs::write(&path, r#"{"gags": "joke", "Cracks": "joke", "hiya": "hello"}"#)?;

    let lemmatizer = DictionaryLemmatizer::from_file(&path).with_fallback(Arc::new(EnglishLemmatizer::new()));
    assert!(!lemmatizer.is_loaded());
    lemmatizer.load()?;
    assert!(lemmatizer.is_loaded());
    assert_eq!(lemmatizer.len(), 3);

    let bot = Chatbot::builder().lemmatizer(Arc::new(lemmatizer)).build()?;

    assert_eq!(bot.classify_intent("gags")?, "joke");
    assert_eq!(bot.classify_intent("cracks")?, "joke");
    assert_eq!(bot.classify_intent("Hiya!")?, "greeting");
    // Unknown to the table, handled by the fallback.
    assert_eq!(bot.classify_intent("jokes")?, "joke");

    Ok(())
}

#[test]
fn test_missing_lemma_table_fails_initialization() {
    let lemmatizer = DictionaryLemmatizer::from_file("/nonexistent/lemmas.json");
    let result = Chatbot::builder().lemmatizer(Arc::new(lemmatizer)).build();

    assert!(matches!(result, Err(ColloquyError::Io(_))));
}

#[test]
fn test_config_from_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "similarity_threshold": 0.5,
            "empty_input_prompt": "Say what?",
            "exit_commands": ["stop"],
            "seed": 99
        }"#,
    )?;

    let config = ChatbotConfig::from_json_file(&path)?;
    assert_eq!(config.similarity_threshold, 0.5);
    assert_eq!(config.farewell, "Goodbye! Have a great day!");
    assert!(config.is_exit_command("STOP"));
    assert!(!config.is_exit_command("quit"));

    let bot = Chatbot::builder().config(config).build()?;
    assert_eq!(bot.get_response("  ")?, "Say what?");
    assert_eq!(bot.classifier().matcher().threshold(), 0.5);

    fs::write(&path, r#"{"similarity_threshold": 1.5}"#)?;
    assert!(matches!(
        ChatbotConfig::from_json_file(&path),
        Err(ColloquyError::Configuration(_))
    ));

    Ok(())
}
