//! Conversion between ISBN-10 and ISBN-13

use std::borrow::Cow;

use crate::config::{HyphenPolicy, IsbnConfig};
use crate::error::{IsbnError, Result};
use crate::validators::{
    is_valid_isbn10_with_config, is_valid_isbn13_with_config, isbn10_base_sum, isbn10_check_char,
    isbn13_check_char, isbn13_sum, remove_hyphens, ISBN10_LENGTH, ISBN13_LENGTH,
};

/// Bookland prefix given to every converted ISBN-10
pub const ISBN13_PREFIX: &str = "978";

/// ISBN-13 prefix with no officially assigned ISBN-10 counterpart
pub const ISBN13_ONLY_PREFIX: &str = "979";

/// Convert an ISBN-10 to its ISBN-13 equivalent.
///
/// The result always carries the 978 prefix. Input is taken as given, so use
/// [`convert_isbn10_to_13_with_config`] with [`HyphenPolicy::Strip`] for
/// hyphenated codes.
pub fn convert_isbn10_to_13(code: &str) -> Result<String> {
    convert_isbn10_to_13_with_config(code, &IsbnConfig::default())
}

pub fn convert_isbn10_to_13_with_config(code: &str, config: &IsbnConfig) -> Result<String> {
    if !is_valid_isbn10_with_config(code, config) {
        tracing::debug!("Refusing ISBN-10 -> ISBN-13 conversion of {:?}", code);
        return Err(IsbnError::NotIsbn10(code.to_string()));
    }

    let source = source_code(code, config.hyphen_policy);
    let mut isbn13 = String::with_capacity(ISBN13_LENGTH);
    isbn13.push_str(ISBN13_PREFIX);
    isbn13.extend(source.chars().take(ISBN10_LENGTH - 1));
    isbn13.push(isbn13_check_char(isbn13_sum(&isbn13)));
    Ok(isbn13)
}

/// Convert an ISBN-13 to ISBN-10.
///
/// 979-prefixed codes have no official ISBN-10, but are still converted into a
/// numerically correct one unless [`IsbnConfig::reject_979_prefix`] is set.
pub fn convert_isbn13_to_10(code: &str) -> Result<String> {
    convert_isbn13_to_10_with_config(code, &IsbnConfig::default())
}

pub fn convert_isbn13_to_10_with_config(code: &str, config: &IsbnConfig) -> Result<String> {
    if !is_valid_isbn13_with_config(code, config) {
        tracing::debug!("Refusing ISBN-13 -> ISBN-10 conversion of {:?}", code);
        return Err(IsbnError::NotIsbn13(code.to_string()));
    }

    if config.reject_979_prefix && remove_hyphens(code).starts_with(ISBN13_ONLY_PREFIX) {
        return Err(IsbnError::NoIsbn10Equivalent(code.to_string()));
    }

    let source = source_code(code, config.hyphen_policy);
    let mut isbn10: String = source
        .chars()
        .skip(ISBN13_PREFIX.len())
        .take(ISBN10_LENGTH - 1)
        .collect();
    isbn10.push(isbn10_check_char(isbn10_base_sum(&isbn10)));
    Ok(isbn10)
}

fn source_code(code: &str, policy: HyphenPolicy) -> Cow<'_, str> {
    match policy {
        HyphenPolicy::Preserve => Cow::Borrowed(code),
        HyphenPolicy::Strip => Cow::Owned(remove_hyphens(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{is_valid_isbn10, is_valid_isbn13};

    #[test]
    fn test_conv_10_to_13() {
        assert_eq!(convert_isbn10_to_13("9992158107").unwrap(), "9789992158104");
        assert_eq!(convert_isbn10_to_13("0306406152").unwrap(), "9780306406157");
        assert_eq!(convert_isbn10_to_13("080442957X").unwrap(), "9780804429573");
    }

    #[test]
    fn test_conv_13_to_10() {
        assert_eq!(convert_isbn13_to_10("9789992158104").unwrap(), "9992158107");
        assert_eq!(convert_isbn13_to_10("9780804429573").unwrap(), "080442957X");
        assert_eq!(convert_isbn13_to_10("9780306406157").unwrap(), "0306406152");
    }

    #[test]
    fn test_conv_rejects_bad_checksum() {
        assert_eq!(
            convert_isbn10_to_13("0306406151"),
            Err(IsbnError::NotIsbn10("0306406151".to_string()))
        );
        assert_eq!(
            convert_isbn13_to_10("9789992158103"),
            Err(IsbnError::NotIsbn13("9789992158103".to_string()))
        );
        assert!(convert_isbn13_to_10("9992158107").is_err());
    }

    #[test]
    fn test_conv_979_produces_pseudo_isbn10() {
        let isbn10 = convert_isbn13_to_10("9790205006129").unwrap();
        assert_eq!(isbn10, "0205006124");
        assert!(is_valid_isbn10(&isbn10));
    }

    #[test]
    fn test_conv_979_rejected_when_configured() {
        let config = IsbnConfig {
            reject_979_prefix: true,
            ..IsbnConfig::default()
        };
        assert_eq!(
            convert_isbn13_to_10_with_config("9790205006129", &config),
            Err(IsbnError::NoIsbn10Equivalent("9790205006129".to_string()))
        );
        assert!(convert_isbn13_to_10_with_config("9789992158104", &config).is_ok());
    }

    #[test]
    fn test_conv_hyphenated_source() {
        let strip = IsbnConfig {
            hyphen_policy: HyphenPolicy::Strip,
            ..IsbnConfig::default()
        };
        assert_eq!(
            convert_isbn10_to_13_with_config("0-306-40615-2", &strip).unwrap(),
            "9780306406157"
        );
        assert_eq!(
            convert_isbn13_to_10_with_config("978-0-306-40615-7", &strip).unwrap(),
            "0306406152"
        );

        // Taken as given, hyphens land in the base and count as zero
        let raw = convert_isbn10_to_13("0-306-40615-2").unwrap();
        assert_eq!(raw, "9780-306-4065");
        assert!(!is_valid_isbn13(&raw));
        assert_eq!(
            convert_isbn13_to_10("978-0-306-40615-7").unwrap(),
            "-0-306-403"
        );
    }
}
