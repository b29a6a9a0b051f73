//! Command implementations for the Colloquy CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::token_filter::{DictionaryLemmatizer, EnglishLemmatizer, Lemmatizer};
use crate::chat::{Chatbot, Session, Turn};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ChatbotConfig;
use crate::error::Result;
use crate::intent::IntentRegistry;

/// Messages sent by the `demo` command.
pub const DEMO_INPUTS: &[&str] = &[
    "Hello!",
    "How are you?",
    "What's your name?",
    "Can you help me?",
    "Tell me a joke",
    "What's the weather like?",
    "Thank you!",
    "Goodbye",
];

/// Execute a CLI command.
pub fn execute_command(args: ColloquyArgs) -> Result<()> {
    let bot = build_chatbot(&args)?;

    match &args.command {
        Command::Chat => run_chat(&bot, &args),
        Command::Ask(ask_args) => ask(&bot, ask_args, &args),
        Command::Classify(classify_args) => classify(&bot, classify_args, &args),
        Command::Demo => run_demo(&bot, &args),
        Command::Intents(intents_args) => list_intents(&bot, intents_args, &args),
    }
}

/// Load configuration and resources named on the command line and initialize
/// the chatbot.
pub fn build_chatbot(args: &ColloquyArgs) -> Result<Chatbot> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            ChatbotConfig::from_json_file(path)?
        }
        None => ChatbotConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let registry = match &args.intents {
        Some(path) => {
            info!("loading intents from {}", path.display());
            IntentRegistry::from_json_file(path)?
        }
        None => IntentRegistry::builtin()?,
    };

    let lemmatizer: Arc<dyn Lemmatizer> = match &args.lemmas {
        Some(path) => Arc::new(
            DictionaryLemmatizer::from_file(path).with_fallback(Arc::new(EnglishLemmatizer::new())),
        ),
        None => Arc::new(EnglishLemmatizer::new()),
    };

    Chatbot::builder()
        .config(config)
        .registry(registry)
        .lemmatizer(lemmatizer)
        .build()
}

/// Interactive loop over standard input.
fn run_chat(bot: &Chatbot, args: &ColloquyArgs) -> Result<()> {
    let human = args.output_format == OutputFormat::Human;
    if human && args.verbosity() > 0 {
        let exits = bot.config().exit_commands.join("', '");
        println!("ChatBot: Hello! I'm a simple chatbot. Type '{exits}' to end the conversation.");
    }

    let stdin = io::stdin();
    let mut session = Session::new(bot);
    converse(&mut session, &mut stdin.lock(), args)?;

    debug!(
        "session finished after {} turns ({} failed)",
        session.turns(),
        session.faults()
    );
    Ok(())
}

/// Feed lines from `reader` to `session` until it ends or input runs out.
/// Lines are read as bytes so undecodable input fails only its own turn.
fn converse<R: BufRead>(session: &mut Session, reader: &mut R, args: &ColloquyArgs) -> Result<()> {
    let human = args.output_format == OutputFormat::Human;
    let mut line = Vec::new();

    loop {
        if human {
            print!("You: ");
            io::stdout().flush()?;
        }

        line.clear();
        let turn = if reader.read_until(b'\n', &mut line)? == 0 {
            if human {
                println!();
            }
            session.end()
        } else {
            session.respond_bytes(&line)
        };

        output_turn(&turn, args)?;
        if turn.is_exit() {
            return Ok(());
        }
    }
}

/// Answer a single message.
fn ask(bot: &Chatbot, ask_args: &AskArgs, args: &ColloquyArgs) -> Result<()> {
    let input = ask_args.text.join(" ");
    let response = bot.get_response(&input)?;

    let result = ReplyResult { input, response };
    output_result("Reply", &result, args)
}

/// Show the classification of a single message.
fn classify(bot: &Chatbot, classify_args: &ClassifyArgs, args: &ColloquyArgs) -> Result<()> {
    let input = classify_args.text.join(" ");
    let classification = bot.classify(&input)?;

    let result = ClassificationResult::new(&input, classification, bot.config().similarity_threshold);
    output_result("Classification", &result, args)
}

/// Run the canned demo conversation.
fn run_demo(bot: &Chatbot, args: &ColloquyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("=== ChatBot Demo ===");
            println!();
            for input in DEMO_INPUTS {
                println!("You: {input}");
                match bot.get_response(input) {
                    Ok(response) => output_turn(&Turn::Reply(response), args)?,
                    Err(e) => output_turn(&Turn::Fault(e.to_string()), args)?,
                }
                println!();
            }
            Ok(())
        }
        OutputFormat::Json => {
            let exchanges = DEMO_INPUTS
                .iter()
                .map(|input| -> Result<ReplyResult> {
                    Ok(ReplyResult {
                        input: input.to_string(),
                        response: bot.get_response(input)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            output_result("Demo", &DemoTranscript { exchanges }, args)
        }
    }
}

/// List the registry.
fn list_intents(bot: &Chatbot, intents_args: &IntentsArgs, args: &ColloquyArgs) -> Result<()> {
    let registry = bot.registry();
    let listing = IntentListing {
        default_intent: registry.default_intent().to_string(),
        total_patterns: registry.pattern_count(),
        intents: registry
            .intents()
            .iter()
            .map(|intent| IntentSummary::new(intent, intents_args.all))
            .collect(),
    };

    output_result(&format!("{} intents", registry.len()), &listing, args)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_build_chatbot_defaults() {
        let args = ColloquyArgs::parse_from(["colloquy", "demo"]);
        let bot = build_chatbot(&args).unwrap();

        assert_eq!(bot.registry().len(), 10);
        assert_eq!(bot.classify_intent("tell me a joke").unwrap(), "joke");
    }

    #[test]
    fn test_build_chatbot_from_files() {
        let mut intents = NamedTempFile::new().unwrap();
        write!(
            intents,
            r#"[
                {{"id": "order", "patterns": ["i want a pizza"], "responses": ["One pizza coming up."]}},
                {{"id": "default", "responses": ["Pardon?"]}}
            ]"#
        )
        .unwrap();

        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"similarity_threshold": 0.5, "farewell": "Ciao!"}}"#).unwrap();

        let mut lemmas = NamedTempFile::new().unwrap();
        write!(lemmas, r#"{{"pizzas": "pizza"}}"#).unwrap();

        let args = ColloquyArgs::parse_from([
            "colloquy".to_string(),
            "--intents".to_string(),
            intents.path().display().to_string(),
            "--config".to_string(),
            config.path().display().to_string(),
            "--lemmas".to_string(),
            lemmas.path().display().to_string(),
            "--seed".to_string(),
            "3".to_string(),
            "demo".to_string(),
        ]);
        let bot = build_chatbot(&args).unwrap();

        assert_eq!(bot.config().farewell, "Ciao!");
        assert_eq!(bot.config().seed, Some(3));
        assert_eq!(bot.get_response("want pizzas").unwrap(), "One pizza coming up.");
        assert_eq!(bot.get_response("weather").unwrap(), "Pardon?");
    }

    #[test]
    fn test_chat_survives_undecodable_line() {
        let args = ColloquyArgs::parse_from(["colloquy", "chat"]);
        let bot = build_chatbot(&args).unwrap();
        let mut session = Session::new(&bot);

        let mut input = io::Cursor::new(b"hello\n\xff\xfe\nhello\nquit\nhello\n".to_vec());
        converse(&mut session, &mut input, &args).unwrap();

        assert!(session.is_finished());
        assert_eq!(session.turns(), 3);
        assert_eq!(session.faults(), 1);
        // Stopped at the exit command; the last line is never read.
        assert_eq!(input.position() as usize, b"hello\n\xff\xfe\nhello\nquit\n".len());
    }

    #[test]
    fn test_chat_ends_at_end_of_input() {
        let args = ColloquyArgs::parse_from(["colloquy", "--format", "json", "chat"]);
        let bot = build_chatbot(&args).unwrap();
        let mut session = Session::new(&bot);

        converse(&mut session, &mut io::Cursor::new(b"hi".to_vec()), &args).unwrap();

        assert!(session.is_finished());
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_demo_inputs_resolve() {
        let args = ColloquyArgs::parse_from(["colloquy", "demo"]);
        let bot = build_chatbot(&args).unwrap();

        let intents: Vec<String> = DEMO_INPUTS
            .iter()
            .map(|input| bot.classify_intent(input).unwrap())
            .collect();
        assert_eq!(
            intents,
            vec![
                "greeting",
                "howareyou",
                "name",
                "help",
                "joke",
                "weather",
                "thanks",
                "goodbye"
            ]
        );
    }
}
