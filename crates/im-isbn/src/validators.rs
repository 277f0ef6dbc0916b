//! ISBN checksum validation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{CharacterPolicy, IsbnConfig};

pub const ISBN10_LENGTH: usize = 10;
pub const ISBN13_LENGTH: usize = 13;

/// The two ISBN forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl IsbnKind {
    /// Number of characters in a normalized code of this kind
    pub fn length(self) -> usize {
        match self {
            IsbnKind::Isbn10 => ISBN10_LENGTH,
            IsbnKind::Isbn13 => ISBN13_LENGTH,
        }
    }

    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            ISBN10_LENGTH => Some(IsbnKind::Isbn10),
            ISBN13_LENGTH => Some(IsbnKind::Isbn13),
            _ => None,
        }
    }
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnKind::Isbn10 => write!(f, "ISBN-10"),
            IsbnKind::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// Validate code as ISBN-10 or ISBN-13, picking the rule by its length once
/// hyphens are removed. Any other length is invalid.
pub fn is_valid_isbn(code: &str) -> bool {
    is_valid_isbn_with_config(code, &IsbnConfig::default())
}

pub fn is_valid_isbn_with_config(code: &str, config: &IsbnConfig) -> bool {
    isbn_kind_with_config(code, config).is_some()
}

/// Validate code as ISBN-10. Accepts hyphenated or not.
///
/// In the default lenient mode `X`/`x` counts as 10 and any other non-digit
/// counts as 0, so malformed input is not rejected outright; it simply
/// rarely satisfies the checksum.
pub fn is_valid_isbn10(code: &str) -> bool {
    is_valid_isbn10_with_config(code, &IsbnConfig::default())
}

pub fn is_valid_isbn10_with_config(code: &str, config: &IsbnConfig) -> bool {
    validate_isbn10(&remove_hyphens(code), config.character_policy)
}

/// Validate code as ISBN-13. Accepts hyphenated or not.
pub fn is_valid_isbn13(code: &str) -> bool {
    is_valid_isbn13_with_config(code, &IsbnConfig::default())
}

pub fn is_valid_isbn13_with_config(code: &str, config: &IsbnConfig) -> bool {
    validate_isbn13(&remove_hyphens(code), config.character_policy)
}

/// Kind of a checksum-valid code, `None` when the code is not a valid ISBN
pub fn isbn_kind(code: &str) -> Option<IsbnKind> {
    isbn_kind_with_config(code, &IsbnConfig::default())
}

pub fn isbn_kind_with_config(code: &str, config: &IsbnConfig) -> Option<IsbnKind> {
    let normalized = remove_hyphens(code);
    let kind = IsbnKind::from_length(normalized.chars().count())?;
    let valid = match kind {
        IsbnKind::Isbn10 => validate_isbn10(&normalized, config.character_policy),
        IsbnKind::Isbn13 => validate_isbn13(&normalized, config.character_policy),
    };
    valid.then_some(kind)
}

/// Check character for the first nine digits of an ISBN-10
///
/// ```
/// assert_eq!(im_isbn::isbn10_check_digit("080442957"), Some('X'));
/// assert_eq!(im_isbn::isbn10_check_digit("08044295"), None);
/// ```
pub fn isbn10_check_digit(base: &str) -> Option<char> {
    if base.len() != ISBN10_LENGTH - 1 || !base.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(isbn10_check_char(isbn10_base_sum(base)))
}

/// Check digit for the first twelve digits of an ISBN-13
pub fn isbn13_check_digit(base: &str) -> Option<char> {
    if base.len() != ISBN13_LENGTH - 1 || !base.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(isbn13_check_char(isbn13_sum(base)))
}

pub(crate) fn remove_hyphens(code: &str) -> String {
    code.replace('-', "")
}

/// Numeric value of a character, 0 when it is not a digit
fn digit_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or(0)
}

/// ISBN-13 weighted sum: weight 1 at even positions, 3 at odd ones
pub(crate) fn isbn13_sum(code: &str) -> u32 {
    code.chars()
        .enumerate()
        .map(|(i, c)| {
            let value = digit_value(c);
            if i % 2 == 0 {
                value
            } else {
                value * 3
            }
        })
        .sum()
}

/// ISBN-10 weighted sum over at most nine base characters, weights 10 down to 2.
/// `X` is not special here.
pub(crate) fn isbn10_base_sum(base: &str) -> u32 {
    base.chars()
        .take(ISBN10_LENGTH - 1)
        .enumerate()
        .map(|(i, c)| digit_value(c) * (ISBN10_LENGTH - i) as u32)
        .sum()
}

pub(crate) fn isbn10_check_char(sum: u32) -> char {
    match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        d => char::from(b'0' + d as u8),
    }
}

pub(crate) fn isbn13_check_char(sum: u32) -> char {
    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}

fn validate_isbn10(normalized: &str, policy: CharacterPolicy) -> bool {
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != ISBN10_LENGTH {
        return false;
    }

    let mut sum = 0;
    for (i, &c) in chars.iter().enumerate() {
        let value = match (policy, c) {
            (CharacterPolicy::Lenient, 'X' | 'x') => 10,
            (CharacterPolicy::Lenient, _) => digit_value(c),
            (CharacterPolicy::Strict, 'X' | 'x') if i == ISBN10_LENGTH - 1 => 10,
            (CharacterPolicy::Strict, _) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += value * (ISBN10_LENGTH - i) as u32;
    }

    sum % 11 == 0
}

fn validate_isbn13(normalized: &str, policy: CharacterPolicy) -> bool {
    if normalized.chars().count() != ISBN13_LENGTH {
        return false;
    }

    if policy == CharacterPolicy::Strict && !normalized.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    isbn13_sum(normalized) % 10 == 0
}
