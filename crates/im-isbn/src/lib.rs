// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! ISBN validation, formatting, conversion, and extraction
//!
//! This crate provides tools for working with International Standard Book Numbers:
//! - ISBN-10 and ISBN-13 checksum validation (hyphens are ignored)
//! - Fixed-position hyphenation
//! - Conversion between ISBN-10 and ISBN-13
//! - Extraction of ISBN-shaped digit runs from free text (URLs, notes, ...)
//!
//! Every operation is a pure function over its input. Behaviour that differs
//! between a lenient, compatible reading and a hardened one is selected with
//! [`IsbnConfig`] through the `*_with_config` entry points.
//!
//! ```
//! use im_isbn::{convert_isbn10_to_13, extract_isbn, format_isbn, is_valid_isbn};
//!
//! assert!(is_valid_isbn("0-306-40615-2"));
//! assert_eq!(format_isbn("9789992158104").unwrap(), "978-9-99-215810-4");
//! assert_eq!(convert_isbn10_to_13("9992158107").unwrap(), "9789992158104");
//! assert_eq!(
//!     extract_isbn("http://gihyo.jp/book/2006/4774129453").unwrap(),
//!     "4774129453"
//! );
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod extractors;
pub mod formatter;
pub mod validators;

pub use config::*;
pub use converter::*;
pub use error::*;
pub use extractors::*;
pub use formatter::*;
pub use validators::*;
