//! triads CLI entry point

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triads::{EngineConfig, TriadEngine, TriadError, TriadsResult, NOTE_NAMES_SHARP};

/// triads - Major triad voicings across the guitar neck
///
/// Finds every three-string voicing of a major triad on the four adjacent
/// string groups and picks four positions per group.
#[derive(Parser, Debug)]
#[command(name = "triads")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to voice (e.g. C, F#, Bb)
    #[arg(value_name = "KEY", required_unless_present = "all")]
    keys: Vec<String>,

    /// Voice all twelve major keys
    #[arg(long, conflicts_with = "keys")]
    all: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// YAML file with max-fret / max-stretch overrides
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, TriadError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|e| {
        TriadError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let config = EngineConfig::from_yaml(&content)?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), TriadError> {
    let engine = TriadEngine::new(load_config(cli.config.as_ref())?)?;

    let keys: Vec<&str> = if cli.all {
        NOTE_NAMES_SHARP.to_vec()
    } else {
        cli.keys.iter().map(String::as_str).collect()
    };

    // Resolve every key before printing so a bad key produces no partial output
    let results = keys
        .iter()
        .map(|key| engine.generate(key))
        .collect::<Result<Vec<TriadsResult>, _>>()?;

    if cli.json {
        let json = match results.as_slice() {
            [single] => single.to_json_pretty()?,
            many => serde_json::to_string_pretty(many)
                .map_err(|e| TriadError::SerializeError(e.to_string()))?,
        };
        println!("{}", json);
    } else {
        let reports: Vec<String> = results.iter().map(triads::to_text).collect();
        print!("{}", reports.join("\n"));
    }

    Ok(())
}
