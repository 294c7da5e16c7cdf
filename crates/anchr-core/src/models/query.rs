//! Declarative extraction queries.
//!
//! A query names an anchor string and a spatial rule for locating the
//! target line relative to it. The two kinds are tagged by `id` on the
//! wire: `"label"` (directional offset plus text alignment) and `"row"`
//! (same visual row, horizontal offset plus tiebreaker).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

use crate::error::QueryError;

/// Direction from the anchor in which the target line is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

/// Horizontal-only direction, used for row queries and text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl From<HorizontalDirection> for Direction {
    fn from(direction: HorizontalDirection) -> Self {
        match direction {
            HorizontalDirection::Left => Direction::Left,
            HorizontalDirection::Right => Direction::Right,
        }
    }
}

/// Rule for picking among several same-row candidates.
///
/// Serialized as a positive 1-based integer or the string `"last"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiebreaker {
    /// 1-based position in filter order.
    Nth(usize),
    /// The final candidate in filter order.
    Last,
}

impl Serialize for Tiebreaker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tiebreaker::Nth(n) => serializer.serialize_u64(*n as u64),
            Tiebreaker::Last => serializer.serialize_str("last"),
        }
    }
}

impl<'de> Deserialize<'de> for Tiebreaker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(i64),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Index(n) if n >= 1 => Ok(Tiebreaker::Nth(n as usize)),
            Raw::Index(n) => Err(de::Error::custom(format!(
                "tiebreaker must be a positive 1-based index, got {n}"
            ))),
            Raw::Keyword(s) if s == "last" => Ok(Tiebreaker::Last),
            Raw::Keyword(s) => Err(de::Error::custom(format!(
                "unknown tiebreaker keyword {s:?}, expected \"last\""
            ))),
        }
    }
}

/// Label query: the target sits in `position` from the anchor and shares
/// its `text_alignment` edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelQuery {
    /// Direction from the anchor to search in.
    pub position: Direction,

    /// Which anchor edge the target is expected to align with.
    pub text_alignment: HorizontalDirection,

    /// Exact text of the anchor line.
    pub anchor: String,
}

/// Row query: the target sits on the same visual row as the anchor, to its
/// left or right, disambiguated by `tiebreaker` when several lines share
/// the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowQuery {
    /// Horizontal direction from the anchor to search in.
    pub position: HorizontalDirection,

    /// Rule applied when more than one candidate shares the row.
    pub tiebreaker: Tiebreaker,

    /// Exact text of the anchor line.
    pub anchor: String,
}

/// A validated extraction query, tagged by `id` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "lowercase")]
pub enum ExtractionQuery {
    Label(LabelQuery),
    Row(RowQuery),
}

impl ExtractionQuery {
    /// Load an extraction query from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, QueryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse an extraction query from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The anchor text this query searches for.
    pub fn anchor(&self) -> &str {
        match self {
            ExtractionQuery::Label(label) => &label.anchor,
            ExtractionQuery::Row(row) => &row.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_label_query() {
        let json = r#"{
            "id": "label",
            "position": "below",
            "textAlignment": "left",
            "anchor": "Distance"
        }"#;

        let query = ExtractionQuery::from_json(json).unwrap();
        assert_eq!(
            query,
            ExtractionQuery::Label(LabelQuery {
                position: Direction::Below,
                text_alignment: HorizontalDirection::Left,
                anchor: "Distance".to_string(),
            })
        );
        assert_eq!(query.anchor(), "Distance");
    }

    #[test]
    fn test_parse_row_query_with_index_tiebreaker() {
        let json = r#"{
            "id": "row",
            "position": "right",
            "tiebreaker": 2,
            "anchor": "Line Haul"
        }"#;

        let query = ExtractionQuery::from_json(json).unwrap();
        assert_eq!(
            query,
            ExtractionQuery::Row(RowQuery {
                position: HorizontalDirection::Right,
                tiebreaker: Tiebreaker::Nth(2),
                anchor: "Line Haul".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_row_query_with_last_tiebreaker() {
        let json = r#"{
            "id": "row",
            "position": "left",
            "tiebreaker": "last",
            "anchor": "Total"
        }"#;

        let query = ExtractionQuery::from_json(json).unwrap();
        match query {
            ExtractionQuery::Row(row) => assert_eq!(row.tiebreaker, Tiebreaker::Last),
            other => panic!("expected row query, got {other:?}"),
        }
    }

    #[test]
    fn test_reject_non_positive_tiebreaker() {
        let json = r#"{
            "id": "row",
            "position": "right",
            "tiebreaker": 0,
            "anchor": "Total"
        }"#;
        assert!(ExtractionQuery::from_json(json).is_err());

        let json = r#"{
            "id": "row",
            "position": "right",
            "tiebreaker": -1,
            "anchor": "Total"
        }"#;
        assert!(ExtractionQuery::from_json(json).is_err());
    }

    #[test]
    fn test_reject_unknown_tiebreaker_keyword() {
        let json = r#"{
            "id": "row",
            "position": "right",
            "tiebreaker": "first",
            "anchor": "Total"
        }"#;
        assert!(ExtractionQuery::from_json(json).is_err());
    }

    #[test]
    fn test_reject_unknown_direction_and_id() {
        let json = r#"{
            "id": "label",
            "position": "diagonal",
            "textAlignment": "left",
            "anchor": "Total"
        }"#;
        assert!(ExtractionQuery::from_json(json).is_err());

        let json = r#"{
            "id": "column",
            "position": "right",
            "tiebreaker": 1,
            "anchor": "Total"
        }"#;
        assert!(ExtractionQuery::from_json(json).is_err());
    }

    #[test]
    fn test_tiebreaker_round_trip() {
        assert_eq!(serde_json::to_string(&Tiebreaker::Nth(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Tiebreaker::Last).unwrap(),
            "\"last\""
        );
    }
}
