//! Error types and error handling for the front-end.
//!
//! This module defines the errors recorded while parsing and evaluating:
//!
//! - Error structures with source position information
//! - Specific error variants for each structural violation
//! - Helpful error names and suggestions for display

pub mod errors;
