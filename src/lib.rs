/// Character Mapper - builds a character correspondence table from two texts
///
/// The two files are compared position by position. Each character of the
/// first file is mapped to the character at the same position in the second,
/// the earliest position winning, and the table is written out as JSON or as
/// a source literal.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::errors::{MappingError, Result};
pub use crate::core::mapper::{build_mapping, CharacterMapping, ConflictRecords, MappingReport};
pub use crate::utils::output_formatter::OutputFormat;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library configuration and defaults
pub mod config {
    use std::fs;
    use std::path::{Path, PathBuf};

    use log::info;
    use serde::Deserialize;

    use crate::core::errors::{MappingError, Result};
    use crate::utils::output_formatter::OutputFormat;

    /// Output path used when neither the command line nor a config file sets one
    pub const DEFAULT_OUTPUT: &str = "char_mapping.json";

    /// Settings read from an optional JSON configuration file.
    ///
    /// Every field is optional; unset fields fall back to the defaults.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct MapperConfig {
        pub output: Option<PathBuf>,
        pub format: Option<OutputFormat>,
    }

    impl MapperConfig {
        /// Load configuration from a JSON file
        pub fn load(path: &Path) -> Result<Self> {
            let content = fs::read_to_string(path).map_err(|e| MappingError::Config {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
            let config: MapperConfig =
                serde_json::from_str(&content).map_err(|e| MappingError::Config {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                })?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }

        /// Output path, preferring `cli` over the file over the default
        pub fn resolve_output(&self, cli: Option<PathBuf>) -> PathBuf {
            cli.or_else(|| self.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
        }

        /// Output format, preferring `cli` over the file over the default
        pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
            cli.or(self.format).unwrap_or_default()
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::path::PathBuf;

    use colored::Colorize;
    use log::info;

    use crate::config::DEFAULT_OUTPUT;
    use crate::core::errors::Result;
    use crate::core::mapper::{build_mapping, MappingReport};
    use crate::utils::file_utils::load_pair;
    use crate::utils::output_formatter::{self, OutputFormat};

    /// One invocation: two inputs, one output
    #[derive(Debug, Clone)]
    pub struct MappingJob {
        pub source: PathBuf,
        pub target: PathBuf,
        pub output: PathBuf,
        pub format: OutputFormat,
        /// Suppress warnings and the success summary
        pub quiet: bool,
    }

    impl MappingJob {
        pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
            Self {
                source: source.into(),
                target: target.into(),
                output: PathBuf::from(DEFAULT_OUTPUT),
                format: OutputFormat::default(),
                quiet: false,
            }
        }

        pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
            self.output = output.into();
            self
        }

        pub fn format(mut self, format: OutputFormat) -> Self {
            self.format = format;
            self
        }

        pub fn quiet(mut self, quiet: bool) -> Self {
            self.quiet = quiet;
            self
        }

        /// Load both inputs, build the mapping and write it out.
        ///
        /// Nothing is written if either input fails to load. Length mismatch
        /// and conflicts are printed as warnings and never fail the run.
        pub fn run(&self) -> Result<MappingReport> {
            info!(
                "Mapping {} onto {}",
                self.source.display(),
                self.target.display()
            );
            let (source, target) = load_pair(&self.source, &self.target)?;
            let report = build_mapping(&source, &target);

            if !self.quiet {
                if let Some((source_len, target_len)) = report.length_mismatch() {
                    println!(
                        "{}",
                        output_formatter::format_length_warning(source_len, target_len)
                    );
                }
                print!("{}", output_formatter::format_conflicts(&report.conflicts));
            }

            output_formatter::export_mapping(&report.mapping, &self.output, self.format)?;

            if !self.quiet {
                println!(
                    "{}",
                    output_formatter::format_summary(&report.mapping, &self.output)
                );
            }
            Ok(report)
        }
    }

    /// Run `job`, printing any read or write error and reporting success as a
    /// boolean.
    pub fn create_character_mapping(job: &MappingJob) -> bool {
        match job.run() {
            Ok(_) => true,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                false
            }
        }
    }
}
