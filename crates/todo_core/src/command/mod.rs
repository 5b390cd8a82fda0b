//! Command grammar for the interactive session.
//!
//! # Responsibility
//! - Parse raw input lines into structured commands.
//! - Keep tokenization out of store and service code.

pub mod parser;
