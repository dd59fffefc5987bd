/// Output formatter for character mappings
///
/// This module writes a finished mapping to disk, either as a pretty-printed
/// JSON object or as a `char_map = { ... }` source literal, and formats the
/// warnings and summary lines shown on the console.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use colored::Colorize;
use log::info;
use serde::Deserialize;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::core::errors::{MappingError, Result};
use crate::core::mapper::{CharacterMapping, ConflictRecords};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object, non-ASCII written as-is
    #[default]
    Json,
    /// `char_map = { "k": "v", ... }` literal with sorted, escaped keys
    Python,
}

/// True for characters that must not appear raw in a string literal:
/// controls, format and bidi characters, surrogates, private use,
/// unassigned code points and every separator except the ASCII space.
fn is_non_printable(c: char) -> bool {
    match get_general_category(c) {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::Unassigned
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => true,
        GeneralCategory::SpaceSeparator => c != ' ',
        _ => false,
    }
}

/// Escape one character for use inside a double-quoted string literal.
///
/// Printable characters, including non-ASCII ones and `'`, are kept as they
/// are.
pub fn escape_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if is_non_printable(c) => {
            let code = c as u32;
            if code <= 0xff {
                format!("\\x{:02x}", code)
            } else if code <= 0xffff {
                format!("\\u{:04x}", code)
            } else {
                format!("\\U{:08x}", code)
            }
        }
        c => c.to_string(),
    }
}

/// Write `mapping` as a two-space indented JSON object in first-seen order.
pub fn write_json<W: Write>(mapping: &CharacterMapping, writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, mapping).map_err(io::Error::from)
}

/// Write `mapping` as a named associative literal, sorted by source character.
pub fn write_literal<W: Write>(mapping: &CharacterMapping, mut writer: W) -> io::Result<()> {
    writeln!(writer, "# Character mapping")?;
    writeln!(writer, "char_map = {{")?;
    for (source, target) in mapping.sorted() {
        writeln!(
            writer,
            "    \"{}\": \"{}\",",
            escape_char(source),
            escape_char(target)
        )?;
    }
    writeln!(writer, "}}")
}

/// Export a mapping to `output_path`, creating or truncating the file.
///
/// # Arguments
///
/// * `mapping` - The mapping to write
/// * `output_path` - Destination file
/// * `format` - Output format
///
/// # Returns
///
/// `Ok(())`, or a `Write` error carrying the I/O cause
pub fn export_mapping(
    mapping: &CharacterMapping,
    output_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(output_path)?);
        match format {
            OutputFormat::Json => write_json(mapping, &mut writer)?,
            OutputFormat::Python => write_literal(mapping, &mut writer)?,
        }
        writer.flush()
    };
    write().map_err(|e| MappingError::write(output_path, e))?;

    info!(
        "Wrote {} mappings to {} as {:?}",
        mapping.len(),
        output_path.display(),
        format
    );
    Ok(())
}

/// Console warning for inputs of different lengths
pub fn format_length_warning(source_len: usize, target_len: usize) -> String {
    format!(
        "{} input lengths differ. File A: {} characters, file B: {} characters\n\
         Only characters within the shorter length will be mapped",
        "Warning:".yellow().bold(),
        source_len,
        target_len
    )
}

/// Single-quoted form of `c` for console output
fn quote_char(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        c => format!("'{}'", escape_char(c)),
    }
}

/// Console listing of conflicting mappings, one line per source character
pub fn format_conflicts(conflicts: &ConflictRecords) -> String {
    let mut output = String::new();
    if conflicts.is_empty() {
        return output;
    }

    let _ = writeln!(
        output,
        "{} conflicting character mappings detected:",
        "Warning:".yellow().bold()
    );
    for (source, targets) in conflicts {
        let targets: Vec<String> = targets
            .iter()
            .map(|&t| quote_char(t))
            .collect();
        let _ = writeln!(
            output,
            "  {} -> {{{}}}",
            quote_char(*source),
            targets.join(", ")
        );
    }
    output
}

/// Console summary printed after a successful write
pub fn format_summary(mapping: &CharacterMapping, output_path: &Path) -> String {
    format!(
        "{} {}\n{} character mappings",
        "Mapping written to".green(),
        output_path.display(),
        mapping.len()
    )
}
