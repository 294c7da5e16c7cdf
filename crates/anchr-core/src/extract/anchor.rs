//! Anchor locator.

use tracing::debug;

use crate::models::{StandardizedLine, StandardizedText};

/// Location of the anchor line within a document. Lives only for the
/// duration of one extraction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorMatch<'a> {
    /// Zero-based index of the page holding the anchor.
    pub page_index: usize,

    /// The anchor line itself.
    pub line: &'a StandardizedLine,
}

/// Find the first line whose text equals `anchor` exactly, scanning pages
/// in order and lines within each page in order.
///
/// Matching is case-sensitive and whole-line; if several lines share the
/// anchor text, only the first in page-major order is ever used.
pub fn find_anchor<'a>(text: &'a StandardizedText, anchor: &str) -> Option<AnchorMatch<'a>> {
    for (page_index, page) in text.pages.iter().enumerate() {
        for line in &page.lines {
            if line.text == anchor {
                debug!(page = page_index, text = %line.text, "anchor line found");
                return Some(AnchorMatch { page_index, line });
            }
        }
    }

    None
}
