//! Candidate rankers ordering lines by proximity to a target X coordinate.

use std::cmp::Ordering;

use crate::models::StandardizedLine;

/// Order `lines` ascending by the distance of each line's right edge to
/// `target_x`. Used when the target is expected to be left-aligned with the
/// anchor: the nearest line is the one whose right edge best approaches the
/// anchor's left X.
pub fn sort_left<'a>(
    lines: &[&'a StandardizedLine],
    target_x: f64,
) -> Vec<&'a StandardizedLine> {
    sort_by_distance(lines, |line| (line.right() - target_x).abs())
}

/// Order `lines` ascending by the distance of each line's left edge to
/// `target_x`.
pub fn sort_right<'a>(
    lines: &[&'a StandardizedLine],
    target_x: f64,
) -> Vec<&'a StandardizedLine> {
    sort_by_distance(lines, |line| (line.left() - target_x).abs())
}

/// Stable ascending order by `distance`, leaving the input slice untouched.
///
/// Equal distances keep their relative input order. The sort copies before
/// ordering so callers can re-rank the same candidate set repeatedly.
pub(crate) fn sort_by_distance<'a, F>(
    lines: &[&'a StandardizedLine],
    distance: F,
) -> Vec<&'a StandardizedLine>
where
    F: Fn(&StandardizedLine) -> f64,
{
    let mut ranked = lines.to_vec();
    ranked.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
