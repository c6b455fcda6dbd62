//! Packaging engine: turns a skill folder into a `.skill` zip archive plus a
//! mirrored `build/` directory for local linking.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod build_dir;
pub mod error;
pub mod pack;
