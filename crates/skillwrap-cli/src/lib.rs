//! skillwrap CLI library — command implementations.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// CLI command implementations.
pub mod commands;
