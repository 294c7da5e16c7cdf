//! Core library for anchor-relative line extraction from standardized OCR text.
//!
//! This crate provides:
//! - A standardized document model (pages, lines, 4-corner bounding polygons)
//! - Declarative extraction queries (label and row)
//! - The geometric resolution core that selects exactly one line per query,
//!   or concludes that none exists

pub mod error;
pub mod extract;
pub mod models;

pub use error::{DocumentError, QueryError};
pub use extract::{AnchorMatch, extract, find_anchor};
pub use models::document::{Point, StandardizedLine, StandardizedPage, StandardizedText};
pub use models::query::{
    Direction, ExtractionQuery, HorizontalDirection, LabelQuery, RowQuery, Tiebreaker,
};
