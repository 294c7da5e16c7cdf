//! Anchor-relative extraction core.
//!
//! Given a standardized document and a declarative query, deterministically
//! select exactly one line or conclude none exists. Every operation here is
//! a pure computation over immutable borrows: filters collect fresh vectors
//! per call and rankers copy before sorting, so the same document can back
//! any number of concurrent extractions.

mod anchor;
mod filter;
mod label;
mod rank;
mod row;

pub use anchor::{AnchorMatch, find_anchor};
pub use filter::lines_in_direction;
pub use label::resolve_label;
pub use rank::{sort_left, sort_right};
pub use row::resolve_row;

use crate::models::{ExtractionQuery, StandardizedLine, StandardizedText};

/// Resolve `query` against `text`, returning the single matching line.
///
/// The sole entry point consumed by the I/O layer. Absence of a match is a
/// value, not an error: a missing anchor, an empty directional filter, and
/// an eliminated row band all collapse to `None`.
pub fn extract<'a>(
    query: &ExtractionQuery,
    text: &'a StandardizedText,
) -> Option<&'a StandardizedLine> {
    match query {
        ExtractionQuery::Label(label) => resolve_label(label, text),
        ExtractionQuery::Row(row) => resolve_row(row, text),
    }
}
