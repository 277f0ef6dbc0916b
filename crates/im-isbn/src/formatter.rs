//! Fixed-position ISBN hyphenation
//!
//! Group boundaries are structural, not derived from registrant ranges:
//! - ISBN-10: `1234567890` -> `1-23-456789-0`
//! - ISBN-13: `9781234567890` -> `978-1-23-456789-0`

use std::borrow::Cow;

use crate::config::{HyphenPolicy, IsbnConfig};
use crate::error::{IsbnError, Result};
use crate::validators::{remove_hyphens, IsbnKind};

const ISBN10_GROUPS: [usize; 4] = [1, 2, 6, 1];
const ISBN13_GROUPS: [usize; 5] = [3, 1, 2, 6, 1];

/// Hyphenate code as ISBN-10 or ISBN-13.
///
/// The raw length must be exactly 10 or 13; hyphens already present count
/// towards it. No checksum verification is performed.
///
/// ```
/// assert_eq!(im_isbn::format_isbn("1234567890").unwrap(), "1-23-456789-0");
/// assert!(im_isbn::format_isbn("978-0-321-12521-7").is_err());
/// ```
pub fn format_isbn(code: &str) -> Result<String> {
    format_isbn_with_config(code, &IsbnConfig::default())
}

/// Hyphenate code, stripping existing hyphens first under [`HyphenPolicy::Strip`]
pub fn format_isbn_with_config(code: &str, config: &IsbnConfig) -> Result<String> {
    let code = match config.hyphen_policy {
        HyphenPolicy::Preserve => Cow::Borrowed(code),
        HyphenPolicy::Strip => Cow::Owned(remove_hyphens(code)),
    };

    let chars: Vec<char> = code.chars().collect();
    match IsbnKind::from_length(chars.len()) {
        Some(IsbnKind::Isbn10) => Ok(hyphenate(&chars, &ISBN10_GROUPS)),
        Some(IsbnKind::Isbn13) => Ok(hyphenate(&chars, &ISBN13_GROUPS)),
        None => Err(IsbnError::InvalidLength(code.into_owned())),
    }
}

fn hyphenate(chars: &[char], groups: &[usize]) -> String {
    let mut result = String::with_capacity(chars.len() + groups.len());
    let mut start = 0;
    for (i, &len) in groups.iter().enumerate() {
        if i > 0 {
            result.push('-');
        }
        result.extend(&chars[start..start + len]);
        start += len;
    }
    result
}
