//! predxlate - translate a serialized host expression tree into its
//! SQL-semantics form

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use predicate_translator::source::Expression;
use predicate_translator::Translator;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// SQL-flavoured rendering
    Text,
    /// The target tree as JSON
    Json,
}

/// predxlate - translate a host expression tree into a SQL-semantics tree
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding the source expression, or `-` for stdin
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable trace logging of every rewrite
    #[arg(short, long)]
    debug: bool,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read expression from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read expression from {}", path.display()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let raw = read_input(&args.input)?;
    let expr: Expression =
        serde_json::from_str(&raw).context("Failed to parse source expression")?;

    let translated = Translator::new()
        .translate(&expr)
        .with_context(|| format!("Failed to translate {}", expr))?;

    match args.format {
        OutputFormat::Text => println!("{}", translated),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&translated).context("Failed to serialize result")?
        ),
    }

    Ok(())
}
