//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::chat::Turn;
use crate::cli::args::{ColloquyArgs, OutputFormat};
use crate::error::Result;
use crate::intent::Intent;
use crate::ml::intent_classifier::Classification;

/// Result structure for a single answered message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResult {
    pub input: String,
    pub response: String,
}

/// Result structure for a classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub input: String,
    pub normalized: String,
    pub intent: String,
    pub score: f64,
    pub threshold: f64,
    pub accepted: bool,
    pub matched_pattern: Option<String>,
}

impl ClassificationResult {
    pub fn new(input: &str, classification: Classification, threshold: f64) -> Self {
        ClassificationResult {
            input: input.to_string(),
            normalized: classification.normalized,
            intent: classification.intent,
            score: classification.score,
            threshold,
            accepted: classification.accepted,
            matched_pattern: classification.matched_pattern,
        }
    }
}

/// One row of the intent listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentSummary {
    pub id: String,
    pub pattern_count: usize,
    pub response_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<String>>,
}

impl IntentSummary {
    pub fn new(intent: &Intent, detailed: bool) -> Self {
        IntentSummary {
            id: intent.id.clone(),
            pattern_count: intent.patterns.len(),
            response_count: intent.responses.len(),
            patterns: detailed.then(|| intent.patterns.clone()),
            responses: detailed.then(|| intent.responses.clone()),
        }
    }
}

/// Result structure for the intent listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentListing {
    pub default_intent: String,
    pub total_patterns: usize,
    pub intents: Vec<IntentSummary>,
}

/// A full demo conversation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoTranscript {
    pub exchanges: Vec<ReplyResult>,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ColloquyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print one turn of an interactive session.
///
/// Human output mimics a chat transcript; JSON output emits one object per
/// turn so a session can be piped into other tools.
pub fn output_turn(turn: &Turn, args: &ColloquyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            match turn {
                Turn::Skip => {}
                Turn::Reply(text) | Turn::Exit(text) => println!("ChatBot: {text}"),
                Turn::Fault(error) => eprintln!("Error: {error}"),
            }
            Ok(())
        }
        OutputFormat::Json => {
            if matches!(turn, Turn::Skip) {
                return Ok(());
            }
            println!("{}", serde_json::to_string(turn)?);
            Ok(())
        }
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ColloquyArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    output_generic_human(&value, 0);
    Ok(())
}

/// Output any value in human format, one `key: value` per line.
fn output_generic_human(value: &serde_json::Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Array(items) if items.iter().any(|i| i.is_object()) => {
                        println!("{indent}{key}:");
                        for item in items {
                            output_generic_human(item, depth + 1);
                            println!();
                        }
                    }
                    serde_json::Value::Null => {}
                    _ => println!("{indent}{key}: {}", format_value(val)),
                }
            }
        }
        _ => println!("{indent}{}", format_value(value)),
    }
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ColloquyArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
