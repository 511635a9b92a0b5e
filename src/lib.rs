//! # qrfile
//!
//! Renders the contents of a text file as a QR code image.
//!
//! Symbol encoding (segmenting, Reed-Solomon error correction, masking) is done by the
//! [`qrcode`] crate. This crate handles everything around it: parsing and validating the command
//! line, reading the input file, drawing the module matrix with custom size, quiet zone and
//! colors, and reporting failures with stable error codes.
//!
//! ## Features
//!
//! - Four error correction levels: L, M, Q, H.
//! - Output as PNG, SVG or UTF-8 text, chosen from the output file's extension.
//! - Custom foreground and background colors.
//! - Typed errors with a stable code and message per kind.
//!
//! ## Example
//!
//! Generate an SVG from a string, without going through the command line:
//!
//! ```no_run
//! use qrfile::generator::Generator;
//! use qrfile::options::{Defaults, Level, Options};
//!
//! let options = Options {
//!     level: Level::H,
//!     output: "hello.svg".into(),
//!     ..Options::from_defaults(&Defaults::default())
//! };
//! Generator::new(options).generate("Hello, World!").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`args`]: Command-line parsing.
//! - [`options`]: Options, defaults and validation.
//! - [`reader`]: Input file loading.
//! - [`generator`]: Encoding and file output.
//! - [`render`]: Drawing a QR code as an image, SVG or text.
//! - [`error`]: Error kinds and messages.

pub mod args;
pub mod error;
pub mod generator;
pub mod options;
pub mod reader;
pub mod render;

#[cfg(test)]
mod test_util;
