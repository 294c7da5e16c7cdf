//! Data models for standardized documents and extraction queries.

pub mod document;
pub mod query;

pub use document::{Point, StandardizedLine, StandardizedPage, StandardizedText};
pub use query::{
    Direction, ExtractionQuery, HorizontalDirection, LabelQuery, RowQuery, Tiebreaker,
};
