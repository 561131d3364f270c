//! Command-line front-end: analyze one text and print the result as JSON.
//!
//! Reads the text from a positional argument, a file, or stdin; emits one
//! JSON object with the analysis record and the recommendation bundle, plus
//! a conversational reply when `--chat` is set.

use anyhow::Result;
use clap::{Arg, Command};
use std::io::Read;
use std::path::PathBuf;
use steady_mind::analyzer::Analyzer;
use steady_mind::config::Config;
use steady_mind::lexicon::Lexicon;
use steady_mind::recommend::recommend;
use steady_mind::reply::{EMPTY_INPUT_REPLY, supportive_reply};

fn main() -> Result<()> {
    steady_mind::load_env();

    let matches = Command::new("steady-mind")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Score a journal entry for stress and suggest coping steps")
        .arg(
            Arg::new("text")
                .value_name("TEXT")
                .help("Text to analyze (reads --file or stdin if omitted)"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Read the text from a file"),
        )
        .arg(
            Arg::new("lexicon")
                .long("lexicon")
                .value_name("PATH")
                .help("Word file overriding the configured lexicon"),
        )
        .arg(
            Arg::new("chat")
                .long("chat")
                .help("Include a conversational reply in the output")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    let text = if let Some(text) = matches.get_one::<String>("text") {
        text.clone()
    } else if let Some(path) = matches.get_one::<String>("file") {
        std::fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let lexicon_path = matches
        .get_one::<String>("lexicon")
        .map(PathBuf::from)
        .or_else(|| config.lexicon.path.clone());
    let analyzer = Analyzer::new(Lexicon::load(lexicon_path.as_deref()));

    let analysis = analyzer.analyze(&text);
    let recommendations = recommend(&analysis);

    let mut output = serde_json::json!({
        "analysis": analysis,
        "recommendations": recommendations,
    });
    if matches.get_flag("chat") {
        let reply = if text.trim().is_empty() {
            EMPTY_INPUT_REPLY
        } else {
            supportive_reply(&analysis)
        };
        output["reply"] = serde_json::Value::String(reply.to_string());
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
