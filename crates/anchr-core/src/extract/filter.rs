//! Directional line filters.

use crate::models::{Direction, StandardizedLine, StandardizedPage};

/// All lines on `page` lying in `direction` from `anchor`, in page order.
///
/// Comparisons are inclusive, so a line exactly touching the anchor's edge
/// qualifies. Returns a freshly collected vector; the page itself is never
/// reordered.
pub fn lines_in_direction<'a>(
    page: &'a StandardizedPage,
    anchor: &StandardizedLine,
    direction: Direction,
) -> Vec<&'a StandardizedLine> {
    page.lines
        .iter()
        .filter(|line| match direction {
            Direction::Below => line.top() >= anchor.bottom(),
            Direction::Above => line.bottom() <= anchor.top(),
            Direction::Right => line.left() >= anchor.right(),
            Direction::Left => line.right() <= anchor.left(),
        })
        .collect()
}
