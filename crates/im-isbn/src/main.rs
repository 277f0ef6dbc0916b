//! im-isbn CLI
//!
//! Validate, hyphenate, convert, and extract ISBNs from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use im_isbn::{
    convert_isbn10_to_13_with_config, convert_isbn13_to_10_with_config, extract_isbn,
    extract_isbns, format_isbn_with_config, isbn_kind_with_config, CharacterPolicy, IsbnConfig,
    IsbnKind,
};

#[derive(Debug, Parser)]
#[command(name = "im-isbn", version, about = "Validate, format, convert, and extract ISBNs")]
struct Cli {
    /// Policy file (.json or .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject non-digit characters instead of counting them as zero
    #[arg(long, global = true)]
    strict: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one or more codes against the ISBN-10 / ISBN-13 checksums
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Insert hyphens at the fixed group positions
    Format { code: String },
    /// Convert between ISBN-10 and ISBN-13
    Convert {
        code: String,
        /// Target form; inferred from the input when omitted
        #[arg(long, value_enum)]
        to: Option<Target>,
    },
    /// Find an ISBN in free text such as a URL
    Extract {
        text: String,
        /// Report every valid ISBN with its position
        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    #[value(name = "10")]
    Isbn10,
    #[value(name = "13")]
    Isbn13,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run a command, returning whether every input succeeded
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => IsbnConfig::load(path)?,
        None => IsbnConfig::default(),
    };
    if cli.strict {
        config.character_policy = CharacterPolicy::Strict;
    }

    match cli.command {
        Command::Validate { codes } => {
            let mut all_valid = true;
            for code in &codes {
                let kind = isbn_kind_with_config(code, &config);
                all_valid &= kind.is_some();
                if cli.json {
                    println!(
                        "{}",
                        json!({ "code": code, "valid": kind.is_some(), "kind": kind })
                    );
                } else {
                    match kind {
                        Some(kind) => println!("{}\tvalid\t{}", code, kind),
                        None => println!("{}\tinvalid", code),
                    }
                }
            }
            Ok(all_valid)
        }
        Command::Format { code } => {
            let formatted = format_isbn_with_config(&code, &config)?;
            print_value(cli.json, &code, &formatted);
            Ok(true)
        }
        Command::Convert { code, to } => {
            let target = to.unwrap_or_else(|| infer_target(&code, &config));
            let converted = match target {
                Target::Isbn13 => convert_isbn10_to_13_with_config(&code, &config)?,
                Target::Isbn10 => convert_isbn13_to_10_with_config(&code, &config)?,
            };
            print_value(cli.json, &code, &converted);
            Ok(true)
        }
        Command::Extract { text, all: false } => {
            let isbn = extract_isbn(&text)?;
            print_value(cli.json, &text, &isbn);
            Ok(true)
        }
        Command::Extract { text, all: true } => {
            let isbns = extract_isbns(&text);
            if cli.json {
                println!("{}", serde_json::to_string(&isbns)?);
            } else {
                for isbn in &isbns {
                    println!(
                        "{}\t{}\t{}..{}",
                        isbn.value, isbn.kind, isbn.start_index, isbn.end_index
                    );
                }
            }
            Ok(!isbns.is_empty())
        }
    }
}

/// A valid ISBN-10 converts up, anything else is treated as an ISBN-13 source
fn infer_target(code: &str, config: &IsbnConfig) -> Target {
    match isbn_kind_with_config(code, config) {
        Some(IsbnKind::Isbn10) => Target::Isbn13,
        _ => Target::Isbn10,
    }
}

fn print_value(as_json: bool, input: &str, output: &str) {
    if as_json {
        println!("{}", json!({ "input": input, "output": output }));
    } else {
        println!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_target() {
        let cli = Cli::try_parse_from(["im-isbn", "convert", "9992158107", "--to", "13"]).unwrap();
        match cli.command {
            Command::Convert { code, to } => {
                assert_eq!(code, "9992158107");
                assert_eq!(to, Some(Target::Isbn13));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["im-isbn", "validate", "0306406152", "--strict", "--json"])
            .unwrap();
        assert!(cli.strict);
        assert!(cli.json);
    }

    #[test]
    fn test_validate_requires_code() {
        assert!(Cli::try_parse_from(["im-isbn", "validate"]).is_err());
    }

    #[test]
    fn test_infer_target() {
        let config = IsbnConfig::default();
        assert_eq!(infer_target("9992158107", &config), Target::Isbn13);
        assert_eq!(infer_target("9789992158104", &config), Target::Isbn10);
    }

    #[test]
    fn test_run_reports_invalid_codes() {
        let cli = Cli::try_parse_from(["im-isbn", "validate", "0306406152", "0306406151"]).unwrap();
        assert!(!run(cli).unwrap());

        let cli = Cli::try_parse_from(["im-isbn", "convert", "0306406151"]).unwrap();
        assert!(run(cli).is_err());
    }
}
