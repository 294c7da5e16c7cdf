//! Row resolver: horizontal offset plus same-row band and tiebreaker.

use tracing::debug;

use super::anchor::find_anchor;
use super::filter::lines_in_direction;
use crate::models::{RowQuery, StandardizedLine, StandardizedText, Tiebreaker};

/// Vertical-center tolerance within which a candidate counts as sitting on
/// the same row as the anchor, in document units. Absorbs minor OCR
/// line-height jitter; the comparison is strict, so a center exactly this
/// far away is outside the row.
const ROW_BAND: f64 = 0.05;

/// Resolve a row query: the single line on the anchor's visual row, to its
/// left or right, disambiguated by the query's tiebreaker.
///
/// A lone directional candidate is returned without the row-band test or
/// tiebreaker; reading order (page order) stands in for distance when the
/// tiebreaker indexes into the band.
pub fn resolve_row<'a>(
    query: &RowQuery,
    text: &'a StandardizedText,
) -> Option<&'a StandardizedLine> {
    let anchor = match find_anchor(text, &query.anchor) {
        Some(anchor) => anchor,
        None => {
            debug!(anchor = %query.anchor, "anchor line not found");
            return None;
        }
    };

    let page = &text.pages[anchor.page_index];
    let candidates = lines_in_direction(page, anchor.line, query.position.into());
    if candidates.is_empty() {
        debug!(position = ?query.position, "no lines in configured direction");
        return None;
    }
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }

    let anchor_center = anchor.line.center_y();
    let in_band: Vec<&StandardizedLine> = candidates
        .iter()
        .copied()
        .filter(|line| (line.center_y() - anchor_center).abs() < ROW_BAND)
        .collect();
    debug!(
        in_band = in_band.len(),
        candidates = candidates.len(),
        "row band narrowed candidates"
    );

    match in_band.len() {
        0 => None,
        1 => Some(in_band[0]),
        _ => match query.tiebreaker {
            Tiebreaker::Last => in_band.last().copied(),
            Tiebreaker::Nth(n) => n.checked_sub(1).and_then(|i| in_band.get(i)).copied(),
        },
    }
}
