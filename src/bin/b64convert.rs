// src/bin/b64convert.rs
//! b64convert — encode a file to base64, or decode one back

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64_file_codec::{decode_file, encode_file, load_config, Convention};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "b64convert", version)]
#[command(about = "Convert a file to base64 and back, deriving output names by suffix")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Naming/payload convention; defaults to the configured one
    #[arg(long, global = true, value_enum)]
    convention: Option<Convention>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a file to base64
    Encode {
        /// Path to the input file
        input_file: PathBuf,
    },
    /// Decode a base64 encoded file back to its original content
    Decode {
        /// Path to the base64 encoded input file
        input_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config();

    let default_level = if config.logging.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let convention = cli.convention.unwrap_or(config.defaults.convention);

    match cli.command {
        Command::Encode { input_file } => {
            let output_file = encode_file(&input_file, convention)
                .with_context(|| format!("Failed to encode {}", input_file.display()))?;
            println!(
                "File {} has been converted to base64 and saved as {}",
                input_file.display(),
                output_file.display()
            );
        }
        Command::Decode { input_file } => {
            let output_file = decode_file(&input_file, convention)
                .with_context(|| format!("Failed to decode {}", input_file.display()))?;
            println!(
                "File {} has been decoded from base64 and saved as {}",
                input_file.display(),
                output_file.display()
            );
        }
    }

    Ok(())
}
