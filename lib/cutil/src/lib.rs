//! # CUtil - Common Utilities Library
//!
//! A collection of small utility modules shared by the workspace crates.
//!
//! ## Features
//!
//! - `fs`: File system utilities (atomic writes, parent directory resolution)
//! - `time`: Time formatting utilities

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
