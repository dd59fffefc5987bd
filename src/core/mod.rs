/// Core module for character mapping
///
/// This module contains the mapping construction and the error types shared
/// by the rest of the crate.

pub mod errors;
pub mod mapper;
