//! Standardized OCR document model.
//!
//! A document is a sequence of pages, each holding the recognized lines in
//! the order the OCR step emitted them. Coordinates are document units with
//! the origin at the top-left of the page.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DocumentError;

/// A point in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A recognized line of text with its bounding polygon.
///
/// The polygon holds exactly four corners, supplied in top-left, top-right,
/// bottom-right, bottom-left order. Edge accessors do not rely on that
/// order (they fold min/max over all four corners); the order itself is a
/// documented contract checked by [`StandardizedText::validate`] at the
/// loading boundary, never by the extraction core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardizedLine {
    /// Recognized text content.
    pub text: String,

    /// Bounding polygon corners.
    pub bounding_polygon: [Point; 4],
}

impl StandardizedLine {
    /// Leftmost X of the bounding polygon.
    pub fn left(&self) -> f64 {
        self.bounding_polygon
            .iter()
            .map(|p| p.x)
            .fold(f64::INFINITY, f64::min)
    }

    /// Rightmost X of the bounding polygon.
    pub fn right(&self) -> f64 {
        self.bounding_polygon
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Topmost Y of the bounding polygon.
    pub fn top(&self) -> f64 {
        self.bounding_polygon
            .iter()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min)
    }

    /// Bottommost Y of the bounding polygon.
    pub fn bottom(&self) -> f64 {
        self.bounding_polygon
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Vertical center of the bounding polygon.
    pub fn center_y(&self) -> f64 {
        (self.top() + self.bottom()) / 2.0
    }

    /// Whether the polygon honors the documented corner contract: an
    /// axis-aligned rectangle with corners in top-left, top-right,
    /// bottom-right, bottom-left order.
    pub fn has_rectangular_polygon(&self) -> bool {
        let [tl, tr, br, bl] = &self.bounding_polygon;
        // Exact comparisons: coordinates come straight from JSON and the
        // contract requires corners to agree, not to be approximately equal.
        tl.y == tr.y
            && bl.y == br.y
            && tl.x == bl.x
            && tr.x == br.x
            && tl.x <= tr.x
            && tl.y <= bl.y
    }
}

/// A single page of recognized lines, in the order the OCR step emitted them.
///
/// Line order carries no meaning for extraction beyond serving as the
/// tie-break of last resort; it is treated as input state and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedPage {
    pub lines: Vec<StandardizedLine>,
}

/// A standardized text document: ordered pages of recognized lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedText {
    pub pages: Vec<StandardizedPage>,
}

impl StandardizedText {
    /// Load a standardized text document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a standardized text document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every bounding polygon against the corner contract.
    ///
    /// Returns one message per malformed polygon; an empty vector means the
    /// whole document is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (page_index, page) in self.pages.iter().enumerate() {
            for (line_index, line) in page.lines.iter().enumerate() {
                if !line.has_rectangular_polygon() {
                    issues.push(format!(
                        "page {page_index}, line {line_index} ({:?}): bounding polygon is not \
                         an axis-aligned rectangle in top-left, top-right, bottom-right, \
                         bottom-left order",
                        line.text
                    ));
                }
            }
        }

        issues
    }
}

/// Build a line with a rectangular bounding polygon from its edges.
#[cfg(test)]
pub(crate) fn rect_line(text: &str, left: f64, top: f64, right: f64, bottom: f64) -> StandardizedLine {
    StandardizedLine {
        text: text.to_string(),
        bounding_polygon: [
            Point { x: left, y: top },
            Point { x: right, y: top },
            Point { x: right, y: bottom },
            Point { x: left, y: bottom },
        ],
    }
}
