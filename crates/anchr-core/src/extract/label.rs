//! Label resolver: directional offset plus text-alignment ranking.

use tracing::debug;

use super::anchor::find_anchor;
use super::filter::lines_in_direction;
use super::rank::{sort_by_distance, sort_left, sort_right};
use crate::models::{Direction, HorizontalDirection, LabelQuery, StandardizedLine, StandardizedText};

/// Number of perpendicular-nearest candidates retained before the
/// alignment ranking pass. A heuristic window, not a geometric guarantee.
const NEIGHBORHOOD: usize = 3;

/// Resolve a label query: the single line in `query.position` from the
/// anchor whose `query.text_alignment` edge best lines up with the anchor.
///
/// Two-stage nearest-neighbor search: proximity along the perpendicular
/// axis narrows the candidates to a small window, then proximity along the
/// aligned axis picks the winner. Candidates equidistant in the first
/// stage keep their page order (stable sort).
pub fn resolve_label<'a>(
    query: &LabelQuery,
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
    let candidates = lines_in_direction(page, anchor.line, query.position);
    if candidates.is_empty() {
        debug!(position = ?query.position, "no lines in configured direction");
        return None;
    }

    let anchor_x = match query.text_alignment {
        HorizontalDirection::Left => anchor.line.left(),
        HorizontalDirection::Right => anchor.line.right(),
    };

    let mut nearest = match query.position {
        Direction::Above => {
            let anchor_top = anchor.line.top();
            sort_by_distance(&candidates, |line| (line.bottom() - anchor_top).abs())
        }
        Direction::Below => {
            let anchor_bottom = anchor.line.bottom();
            sort_by_distance(&candidates, |line| (line.top() - anchor_bottom).abs())
        }
        Direction::Right => sort_by_distance(&candidates, |line| (line.left() - anchor_x).abs()),
        Direction::Left => sort_by_distance(&candidates, |line| (line.right() - anchor_x).abs()),
    };
    nearest.truncate(NEIGHBORHOOD);
    debug!(
        kept = nearest.len(),
        total = candidates.len(),
        "perpendicular neighborhood selected"
    );

    let aligned = match query.text_alignment {
        HorizontalDirection::Left => sort_left(&nearest, anchor_x),
        HorizontalDirection::Right => sort_right(&nearest, anchor_x),
    };

    aligned.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::rect_line;
    use crate::models::StandardizedPage;

    fn freight_page() -> StandardizedText {
        StandardizedText {
            pages: vec![StandardizedPage {
                lines: vec![
                    rect_line("Distance", 2.005, 4.224, 2.438, 4.328),
                    // Left-aligned with the anchor, just below it.
                    rect_line("733mi", 2.005, 4.413, 2.374, 4.541),
                    // Further below, also left-aligned.
                    rect_line("Weight", 2.005, 4.7, 2.5, 4.8),
                    // Vertically nearest to the anchor, but offset right.
                    rect_line("offset", 3.2, 4.4, 3.8, 4.52),
                ],
            }],
        }
    }

    #[test]
    fn test_below_left_aligned() {
        let query = LabelQuery {
            position: Direction::Below,
            text_alignment: HorizontalDirection::Left,
            anchor: "Distance".to_string(),
        };

        let page = freight_page();
        let result = resolve_label(&query, &page).unwrap();
        assert_eq!(result.text, "733mi");
    }

    #[test]
    fn test_alignment_overrides_vertical_proximity() {
        // "offset" is vertically closer to the anchor than "733mi", but the
        // left-alignment pass picks the line sharing the anchor's left edge
        // from the retained neighborhood.
        let query = LabelQuery {
            position: Direction::Below,
            text_alignment: HorizontalDirection::Left,
            anchor: "Distance".to_string(),
        };

        let page = freight_page();
        let result = resolve_label(&query, &page).unwrap();
        assert_ne!(result.text, "offset");
        assert_eq!(result.text, "733mi");
    }

    #[test]
    fn test_above_right_aligned() {
        let text = StandardizedText {
            pages: vec![StandardizedPage {
                lines: vec![
                    rect_line("$1770.00", 6.765, 1.994, 7.315, 2.122),
                    rect_line("Total", 6.9, 2.3, 7.315, 2.45),
                ],
            }],
        };
        let query = LabelQuery {
            position: Direction::Above,
            text_alignment: HorizontalDirection::Right,
            anchor: "Total".to_string(),
        };

        let result = resolve_label(&query, &text).unwrap();
        assert_eq!(result.text, "$1770.00");
    }

    #[test]
    fn test_right_of_anchor() {
        let text = StandardizedText {
            pages: vec![StandardizedPage {
                lines: vec![
                    rect_line("Amount", 1.0, 1.0, 1.8, 1.2),
                    rect_line("$42.00", 2.0, 1.0, 2.6, 1.2),
                    rect_line("$99.00", 4.0, 1.0, 4.6, 1.2),
                ],
            }],
        };
        let query = LabelQuery {
            position: Direction::Right,
            text_alignment: HorizontalDirection::Right,
            anchor: "Amount".to_string(),
        };

        let result = resolve_label(&query, &text).unwrap();
        assert_eq!(result.text, "$42.00");
    }

    #[test]
    fn test_anchor_not_found() {
        let query = LabelQuery {
            position: Direction::Above,
            text_alignment: HorizontalDirection::Right,
            anchor: "Nonexistent".to_string(),
        };
        assert!(resolve_label(&query, &freight_page()).is_none());
    }

    #[test]
    fn test_no_line_in_direction() {
        // "Distance" is the topmost line, so nothing qualifies as above it.
        let text = StandardizedText {
            pages: vec![StandardizedPage {
                lines: vec![
                    rect_line("Distance", 2.005, 4.224, 2.438, 4.328),
                    rect_line("733mi", 2.005, 4.413, 2.374, 4.541),
                ],
            }],
        };
        let query = LabelQuery {
            position: Direction::Above,
            text_alignment: HorizontalDirection::Left,
            anchor: "Distance".to_string(),
        };
        assert!(resolve_label(&query, &text).is_none());
    }
}
