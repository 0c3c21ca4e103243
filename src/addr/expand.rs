//! Expansion of comma-separated address specs into discrete tokens.
//!
//! Accepted entries (case-insensitive prefix, ASCII digits):
//!   CIO4012-4019   range, explicit type
//!   W4021          single, explicit type
//!   4030           single, caller's default type
//!
//! Entries that do not match are collected, never fatal.

use crate::addr::{AddressToken, AddressType};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Capture:
// 1) type prefix (optional)
// 2) start number
// 3) end number (optional)
const ENTRY_RE: &str = r"(?i)^(CIO|W|D|H)?([0-9]+)(?:-([0-9]+))?$";

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTRY_RE).expect("address entry regex compiles"));

/// Result of expanding one address spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Expansion {
    /// Tokens in entry order; ascending within each range.
    pub tokens: Vec<AddressToken>,
    /// Trimmed entries that did not parse, in input order.
    pub invalid: Vec<String>,
}

impl Expansion {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Combined user-facing message for the rejected entries, if any.
    pub fn warning(&self) -> Option<String> {
        invalid_entries_message(&self.invalid)
    }
}

pub(crate) fn invalid_entries_message(invalid: &[String]) -> Option<String> {
    if invalid.is_empty() {
        None
    } else {
        Some(format!(
            "Skipped invalid address entries: {}",
            invalid.join(", ")
        ))
    }
}

/// Expand `spec` into typed addresses. Entries without a prefix take `default_type`.
///
/// A range whose end is below its start produces no tokens and is not
/// reported as invalid.
pub fn expand(spec: &str, default_type: AddressType) -> Expansion {
    let mut out = Expansion::default();

    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match parse_entry(entry, default_type) {
            Some((kind, start, end)) => {
                out.tokens
                    .extend((start..=end).map(|number| AddressToken::new(kind, number)));
            }
            None => out.invalid.push(entry.to_string()),
        }
    }

    out
}

/// Parse one trimmed entry into (type, start, end). None if the grammar does
/// not match or a number does not fit in u64.
fn parse_entry(entry: &str, default_type: AddressType) -> Option<(AddressType, u64, u64)> {
    let caps = ENTRY.captures(entry)?;

    let kind = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => default_type,
    };
    let start: u64 = caps.get(2)?.as_str().parse().ok()?;
    let end: u64 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => start,
    };

    Some((kind, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tok(kind: AddressType, number: u64) -> AddressToken {
        AddressToken::new(kind, number)
    }

    #[test]
    fn bare_number_takes_default_type() {
        for t in AddressType::ALL {
            let e = expand("4030", t);
            assert_eq!(e.tokens, vec![tok(t, 4030)]);
            assert!(e.is_clean());
        }
    }

    #[test]
    fn range_is_inclusive_and_ascending() {
        let e = expand("CIO4012-4019", AddressType::W);
        let numbers: Vec<u64> = e.tokens.iter().map(|t| t.number).collect();
        assert_eq!(numbers, (4012..=4019).collect::<Vec<_>>());
        assert!(e.tokens.iter().all(|t| t.kind == AddressType::Cio));
    }

    #[test]
    fn reversed_range_yields_nothing() {
        let e = expand("W4019-4012", AddressType::Cio);
        assert!(e.tokens.is_empty());
        assert!(e.invalid.is_empty());
    }

    #[test]
    fn single_value_range() {
        let e = expand("D7-7", AddressType::Cio);
        assert_eq!(e.tokens, vec![tok(AddressType::D, 7)]);
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let e = expand("cio1, w2, d3, h4", AddressType::Cio);
        assert_eq!(
            e.tokens,
            vec![
                tok(AddressType::Cio, 1),
                tok(AddressType::W, 2),
                tok(AddressType::D, 3),
                tok(AddressType::H, 4),
            ]
        );
    }

    #[test]
    fn entry_order_wins_over_numeric_order() {
        let e = expand("H6000-6002, 10, W5", AddressType::D);
        assert_eq!(
            e.tokens,
            vec![
                tok(AddressType::H, 6000),
                tok(AddressType::H, 6001),
                tok(AddressType::H, 6002),
                tok(AddressType::D, 10),
                tok(AddressType::W, 5),
            ]
        );
    }

    #[test]
    fn empty_entries_are_discarded() {
        let e = expand(" , ,W1,, ", AddressType::Cio);
        assert_eq!(e.tokens, vec![tok(AddressType::W, 1)]);
        assert!(e.is_clean());

        assert_eq!(expand("", AddressType::Cio), Expansion::default());
    }

    #[test]
    fn invalid_entries_are_collected_and_siblings_kept() {
        let e = expand("CIO4012, CIO40a2, X12, W4021, 12-, -5, CIO 5", AddressType::Cio);
        assert_eq!(
            e.tokens,
            vec![tok(AddressType::Cio, 4012), tok(AddressType::W, 4021)]
        );
        assert_eq!(e.invalid, vec!["CIO40a2", "X12", "12-", "-5", "CIO 5"]);
        assert_eq!(
            e.warning().as_deref(),
            Some("Skipped invalid address entries: CIO40a2, X12, 12-, -5, CIO 5")
        );
    }

    #[test]
    fn non_ascii_digits_are_invalid() {
        let e = expand("W٤٥", AddressType::Cio);
        assert!(e.tokens.is_empty());
        assert_eq!(e.invalid, vec!["W٤٥"]);
    }

    #[test]
    fn numbers_above_u32_are_kept() {
        let e = expand("D4294967296", AddressType::Cio);
        assert_eq!(e.tokens, vec![tok(AddressType::D, 4_294_967_296)]);
        assert!(e.is_clean());
    }

    #[test]
    fn number_past_u64_is_invalid() {
        let e = expand("D18446744073709551616, D18446744073709551615, D1", AddressType::Cio);
        assert_eq!(
            e.tokens,
            vec![tok(AddressType::D, u64::MAX), tok(AddressType::D, 1)]
        );
        assert_eq!(e.invalid, vec!["D18446744073709551616"]);
    }

    #[test]
    fn range_ending_at_u64_max_terminates() {
        let e = expand("18446744073709551614-18446744073709551615", AddressType::H);
        assert_eq!(
            e.tokens,
            vec![tok(AddressType::H, u64::MAX - 1), tok(AddressType::H, u64::MAX)]
        );
    }

    #[test]
    fn clean_expansion_has_no_warning() {
        assert_eq!(expand("W1-3", AddressType::Cio).warning(), None);
    }
}
