//! Squad CSV CLI
//!
//! `squad_csv [INPUT] [OUTPUT]`: teams/players JSON → player,nationality CSV.
//! Missing paths fall back to stdin / stdout. Logs go to stderr.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use squad_csv::{ConversionMetadata, ConvertOptions, LineTerminator};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "squad_csv")]
#[command(about = "Convert teams/players JSON into a player,nationality CSV", long_about = None)]
struct Cli {
    /// Input JSON file path (stdin when omitted)
    input: Option<PathBuf>,

    /// Output CSV file path (stdout when omitted)
    output: Option<PathBuf>,

    /// Terminate rows with LF instead of CRLF
    #[arg(long)]
    lf: bool,

    /// Output metadata JSON file
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ConvertOptions {
        terminator: if cli.lf {
            LineTerminator::Lf
        } else {
            LineTerminator::CrLf
        },
    };

    let stats = squad_csv::convert_paths(cli.input.as_deref(), cli.output.as_deref(), &options)?;

    if let Some(metadata_path) = cli.metadata {
        let meta = ConversionMetadata::new(stats, cli.input.as_deref(), cli.output.as_deref());
        squad_csv::write_metadata(&metadata_path, &meta)?;
        tracing::info!(path = %metadata_path.display(), "metadata saved");
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout carries the CSV
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("squad_csv CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
