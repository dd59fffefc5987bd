/// Character Mapper - builds a character correspondence table from two texts
///
/// The main entry point for the character mapper. It parses command-line
/// arguments, sets up logging and configuration, and runs the mapping.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use char_mapper::app::{create_character_mapping, MappingJob};
use char_mapper::config::MapperConfig;
use char_mapper::OutputFormat;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "char_mapper",
    version,
    about = "Create a character mapping table from file A to file B",
    long_about = "Compares two text files position by position and maps every character of \
file A to the character at the same position in file B.
- The first mapping seen for a character wins
- Conflicting later mappings are reported as warnings
- Line breaks are never mapped"
)]
struct Args {
    /// Path to source file A
    file_a: PathBuf,

    /// Path to target file B
    file_b: PathBuf,

    /// Output file path (default: char_mapping.json)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format (default: json)
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Suppress warnings and the summary
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: warn)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Log file path (default: stderr)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args)?;

    let config = match &args.config {
        Some(path) => MapperConfig::load(path)?,
        None => MapperConfig::default(),
    };

    let job = MappingJob::new(&args.file_a, &args.file_b)
        .output(config.resolve_output(args.output.clone()))
        .format(config.resolve_format(args.format))
        .quiet(args.quiet);
    debug!("Resolved job: {:?}", job);

    // The exit status does not reflect the outcome; failures are only printed.
    let _ = create_character_mapping(&job);

    Ok(())
}

/// Set up logging to stderr or to the requested log file
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}
