//! katachi crate example
//!
//! Analyzes words given on the command line (or a built-in list) and prints the JSON records.
//!
//! ```bash
//! KATACHI_LEXICON_PATH=./jmdict-eng.json cargo run -p katachi --example example_katachi -- 書いて 見られる
//! ```

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use katachi::{KatachiConfig, KatachiService};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

const DEFAULT_WORDS: [&str; 5] = ["書いて", "見られる", "食べさせられた", "勉強しません", "来なかった"];

fn main() -> AppResult<()> {
  // Use RUST_LOG environment variable if set
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,katachi=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  let mut config = KatachiConfig::default();
  config.lexicon.path = std::env::var("KATACHI_LEXICON_PATH").ok().map(PathBuf::from);

  // Missing dictionary or lexicon degrades the records instead of failing
  let service = KatachiService::init(&config)?;
  println!("{service:?}");

  let args: Vec<String> = std::env::args().skip(1).collect();
  let words: Vec<&str> = if args.is_empty() {
    DEFAULT_WORDS.to_vec()
  } else {
    args.iter().map(String::as_str).collect()
  };

  for word in words {
    let record = service.analyze_word(word)?;
    println!("=== {word} ===");
    println!("{}", serde_json::to_string_pretty(&record)?);
  }

  Ok(())
}
