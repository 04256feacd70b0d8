//! Card layout: in-memory filtering of the resolved roster and its
//! partitioning into fixed-size printed sheets.

pub mod render;

use serde::Deserialize;

use crate::roster::CardRecord;

pub use render::{encoded_identifier_svg, render_card, render_print_document, render_sheet};

/// Cards laid out on one printed sheet.
pub const CARDS_PER_SHEET: usize = 4;

/// Filter predicates applied to the roster before layout.
///
/// Predicates compose with AND; a blank or missing value is a no-op. The
/// whole configuration is an immutable value recomputed into a derived
/// filtered list on each change, never mutated in place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardFilter {
    /// Case-insensitive substring match against `full_name`.
    pub search: Option<String>,
    /// Exact match against the school label.
    pub school: Option<String>,
    /// Exact match against the office label.
    pub office: Option<String>,
    /// Exact match against the resolved division name.
    pub division: Option<String>,
}

impl CardFilter {
    pub fn is_match(&self, record: &CardRecord) -> bool {
        if let Some(school) = non_blank(&self.school) {
            if record.school.as_deref() != Some(school) {
                return false;
            }
        }
        if let Some(office) = non_blank(&self.office) {
            if record.office.as_deref() != Some(office) {
                return false;
            }
        }
        if let Some(division) = non_blank(&self.division) {
            if record.division_name.as_deref() != Some(division) {
                return false;
            }
        }
        if let Some(search) = non_blank(&self.search) {
            let needle = search.to_lowercase();
            if !record.full_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Narrows `records` to the matching subset, preserving order.
    pub fn apply<'a>(&self, records: &'a [CardRecord]) -> Vec<&'a CardRecord> {
        records.iter().filter(|r| self.is_match(r)).collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Number of printed sheets needed for `filtered` records.
pub fn sheet_count(filtered: usize) -> usize {
    filtered.div_ceil(CARDS_PER_SHEET)
}

/// Partitions the filtered roster into sheets of [`CARDS_PER_SHEET`].
///
/// Assignment is positional: record `i` lands on sheet `i / 4`. The filtered
/// ordering is preserved, so concatenating the sheets reproduces the input.
pub fn sheets<'a, 'b>(records: &'b [&'a CardRecord]) -> impl Iterator<Item = &'b [&'a CardRecord]> {
    records.chunks(CARDS_PER_SHEET)
}
