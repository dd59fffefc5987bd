/// Utility modules for the character mapper
///
/// This module contains the input loader and the output formatter.

pub mod file_utils;
pub mod output_formatter;
