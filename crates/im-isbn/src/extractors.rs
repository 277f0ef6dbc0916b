//! ISBN extraction from text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{IsbnError, Result};
use crate::validators::{is_valid_isbn10, is_valid_isbn13, IsbnKind};

/// Extracted ISBN with position information (byte offsets into the text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIsbn {
    pub kind: IsbnKind,
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    static ref ISBN13_REGEX: Regex = Regex::new(r"[0-9]{13}").unwrap();
    static ref ISBN10_REGEX: Regex = Regex::new(r"[0-9]{9}[0-9xX]").unwrap();
}

/// Extract a valid ISBN from text (e.g. a URL).
///
/// The first run of 13 digits wins; only when there is none is the first
/// ISBN-10 shaped run considered. A candidate that fails its checksum is
/// reported as not found rather than falling through to the next one.
pub fn extract_isbn(text: &str) -> Result<String> {
    let (candidate, valid) = match ISBN13_REGEX.find(text) {
        Some(m) => (m.as_str(), is_valid_isbn13(m.as_str())),
        None => match ISBN10_REGEX.find(text) {
            Some(m) => (m.as_str(), is_valid_isbn10(m.as_str())),
            None => return Err(IsbnError::NotFound(text.to_string())),
        },
    };

    if !valid {
        tracing::debug!("ISBN candidate {} fails its checksum", candidate);
        return Err(IsbnError::NotFound(text.to_string()));
    }

    Ok(candidate.to_string())
}

/// Extract every checksum-valid ISBN from text, sorted by position.
///
/// ISBN-10 shaped runs lying inside a 13-digit run are skipped, whether or not
/// that run is itself a valid ISBN-13.
pub fn extract_isbns(text: &str) -> Vec<ExtractedIsbn> {
    let isbn13_spans: Vec<(usize, usize)> = ISBN13_REGEX
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut results: Vec<ExtractedIsbn> = ISBN13_REGEX
        .find_iter(text)
        .filter(|m| is_valid_isbn13(m.as_str()))
        .map(|m| extracted(IsbnKind::Isbn13, m))
        .collect();

    for m in ISBN10_REGEX.find_iter(text) {
        let overlaps = isbn13_spans
            .iter()
            .any(|&(start, end)| m.start() < end && start < m.end());
        if overlaps {
            continue;
        }
        if is_valid_isbn10(m.as_str()) {
            results.push(extracted(IsbnKind::Isbn10, m));
        } else {
            tracing::trace!("Skipping ISBN-10 candidate {}", m.as_str());
        }
    }

    // Sort by position
    results.sort_by_key(|r| r.start_index);
    results
}

fn extracted(kind: IsbnKind, m: regex::Match<'_>) -> ExtractedIsbn {
    ExtractedIsbn {
        kind,
        value: m.as_str().to_string(),
        start_index: m.start() as u32,
        end_index: m.end() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_isbn13_from_url() {
        assert_eq!(
            extract_isbn("http://www.oreilly.co.jp/books/9784873117362/").unwrap(),
            "9784873117362"
        );
    }

    #[test]
    fn test_extract_isbn10_from_url() {
        assert_eq!(
            extract_isbn("http://gihyo.jp/book/2006/4774129453").unwrap(),
            "4774129453"
        );
        assert_eq!(
            extract_isbn("http://example.com/097522980X/abc").unwrap(),
            "097522980X"
        );
    }

    #[test]
    fn test_extract_rejects_bad_checksum() {
        let text = "http://book.impress.co.jp/books/1115101122";
        assert_eq!(
            extract_isbn(text),
            Err(IsbnError::NotFound(text.to_string()))
        );
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_isbn("no digits here").is_err());
        assert!(extract_isbn("").is_err());
    }

    #[test]
    fn test_invalid_isbn13_does_not_fall_back() {
        // The 13-digit run is invalid; its leading 0306406152 is never tried
        assert!(extract_isbn("ref 0306406152999").is_err());
    }

    #[test]
    fn test_extract_isbns() {
        let text = "ISBN 9780321125217, older edition 0306406152, bogus 1115101122";
        let isbns = extract_isbns(text);
        assert_eq!(isbns.len(), 2);
        assert_eq!(isbns[0].kind, IsbnKind::Isbn13);
        assert_eq!(isbns[0].value, "9780321125217");
        assert_eq!(isbns[0].start_index, 5);
        assert_eq!(isbns[0].end_index, 18);
        assert_eq!(isbns[1].kind, IsbnKind::Isbn10);
        assert_eq!(isbns[1].value, "0306406152");
    }

    #[test]
    fn test_extract_isbns_serializes() {
        let isbns = extract_isbns("080442957X");
        let json = serde_json::to_string(&isbns).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"isbn10","value":"080442957X","start_index":0,"end_index":10}]"#
        );
    }
}
