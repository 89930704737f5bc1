use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use khata_core::ClassifyError;
use khata_sms::SmsClassifier;
use khata_sync::{PersistenceClient, TransactionEmitter};

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Classify bank alert messages into transactions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify message text and print each transaction as JSON
    Parse {
        /// Message text; reads stdin when omitted
        #[arg(long)]
        text: Option<String>,

        /// File with one message per line
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Classify messages and sync them to the persistence service
    Sync {
        /// File with one message per line
        #[arg(long)]
        file: PathBuf,

        /// Base URL of the persistence API
        #[arg(long, default_value = "http://localhost:3001/api")]
        api: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { text, file } => {
            let messages = gather_messages(text, file)?;
            let classifier = SmsClassifier::system()?;

            let mut parsed = 0usize;
            for msg in &messages {
                match classifier.classify(msg) {
                    Ok(txn) => {
                        println!("{}", serde_json::to_string(&txn)?);
                        parsed += 1;
                    }
                    Err(ClassifyError::NoPatternMatched) => {
                        eprintln!("could not parse, enter manually: {msg}");
                    }
                }
            }
            eprintln!("\nParsed {parsed}/{} messages", messages.len());
        }

        Command::Sync { file, api } => {
            let messages = gather_messages(None, Some(file))?;
            let classifier = SmsClassifier::system()?;
            let emitter = TransactionEmitter::new(PersistenceClient::new(api));

            let txns: Vec<_> = classifier
                .classify_batch(messages.iter().map(String::as_str))
                .into_iter()
                .filter_map(|r| r.ok())
                .collect();
            let skipped = messages.len() - txns.len();

            let outcomes = emitter.emit_all(txns).await;
            let persisted = outcomes.iter().filter(|o| o.is_persisted()).count();
            let local = outcomes.len() - persisted;

            println!(
                "Synced {persisted} transactions ({local} saved locally, not synced; {skipped} unparseable)"
            );
            for outcome in outcomes.iter().filter(|o| !o.is_persisted()) {
                println!("  local only: {}", serde_json::to_string(outcome.transaction())?);
            }
        }
    }

    Ok(())
}

fn gather_messages(text: Option<String>, file: Option<PathBuf>) -> Result<Vec<String>> {
    let raw = match (text, file) {
        (Some(_), Some(_)) => bail!("pass --text or --file, not both"),
        (Some(text), None) => return Ok(vec![text]),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let messages: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if messages.is_empty() {
        bail!("no messages to classify");
    }
    Ok(messages)
}
