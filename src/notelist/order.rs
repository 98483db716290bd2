//! # Ordering
//!
//! A [`NoteOrder`] names one field to sort by and carries the direction for
//! that field. Exactly one field and one direction are active at a time.
//!
//! Sorting is always stable: notes whose keys compare equal keep the order in
//! which the store handed them over, whichever direction is active. There is
//! no secondary tie-break field.
//!
//! Orders print and parse as `field[:direction]`:
//!
//! ```text
//! title:asc   date:desc   color   (direction defaults to desc)
//! ```

use crate::model::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Ascending,
    Descending,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Ascending => write!(f, "asc"),
            OrderType::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(OrderType::Ascending),
            "desc" | "descending" => Ok(OrderType::Descending),
            _ => Err(format!("Invalid order direction: {}", s)),
        }
    }
}

/// The active sort field together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", content = "direction", rename_all = "lowercase")]
pub enum NoteOrder {
    Title(OrderType),
    Date(OrderType),
    Color(OrderType),
}

impl Default for NoteOrder {
    fn default() -> Self {
        NoteOrder::Date(OrderType::Descending)
    }
}

impl NoteOrder {
    pub fn order_type(&self) -> OrderType {
        match *self {
            NoteOrder::Title(t) | NoteOrder::Date(t) | NoteOrder::Color(t) => t,
        }
    }

    /// Same field, new direction.
    pub fn with_order_type(self, order_type: OrderType) -> Self {
        match self {
            NoteOrder::Title(_) => NoteOrder::Title(order_type),
            NoteOrder::Date(_) => NoteOrder::Date(order_type),
            NoteOrder::Color(_) => NoteOrder::Color(order_type),
        }
    }

    /// True when both orders sort by the same field, whatever the direction.
    pub fn same_field(&self, other: &NoteOrder) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            NoteOrder::Title(_) => "title",
            NoteOrder::Date(_) => "date",
            NoteOrder::Color(_) => "color",
        }
    }

    /// Three-way comparison along the active field, direction applied.
    pub fn compare(&self, a: &Note, b: &Note) -> Ordering {
        let (a, b) = match self.order_type() {
            OrderType::Ascending => (a, b),
            OrderType::Descending => (b, a),
        };
        match self {
            NoteOrder::Title(_) => a.title.cmp(&b.title),
            NoteOrder::Date(_) => a.timestamp.cmp(&b.timestamp),
            NoteOrder::Color(_) => a.color.cmp(&b.color),
        }
    }

    /// Stable sort in place.
    pub fn sort(&self, notes: &mut [Note]) {
        notes.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns a sorted copy, leaving `notes` in its original order.
    pub fn sorted(&self, notes: &[Note]) -> Vec<Note> {
        let mut out = notes.to_vec();
        self.sort(&mut out);
        out
    }
}

impl std::fmt::Display for NoteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.field_name(), self.order_type())
    }
}

impl FromStr for NoteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, OrderType::from_str(direction)?),
            None => (s, OrderType::Descending),
        };
        match field.to_ascii_lowercase().as_str() {
            "title" => Ok(NoteOrder::Title(direction)),
            "date" => Ok(NoteOrder::Date(direction)),
            "color" => Ok(NoteOrder::Color(direction)),
            _ => Err(format!("Invalid order field: {}", field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str, timestamp: i64, color: i32) -> Note {
        Note::new(title, "")
            .with_id(id)
            .with_timestamp(timestamp)
            .with_color(color)
    }

    fn ids(notes: &[Note]) -> Vec<i64> {
        notes.iter().filter_map(|n| n.id).collect()
    }

    #[test]
    fn title_ascending_is_lexicographic() {
        let notes = vec![
            note(1, "banana", 0, 0),
            note(2, "Apple", 0, 0),
            note(3, "apple", 0, 0),
        ];
        let sorted = NoteOrder::Title(OrderType::Ascending).sorted(&notes);
        // Uppercase sorts before lowercase in byte order
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn title_descending_is_exact_reverse_for_distinct_titles() {
        let notes = vec![
            note(1, "m", 0, 0),
            note(2, "a", 0, 0),
            note(3, "z", 0, 0),
            note(4, "k", 0, 0),
        ];
        let asc = NoteOrder::Title(OrderType::Ascending).sorted(&notes);
        let mut desc = NoteOrder::Title(OrderType::Descending).sorted(&notes);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn date_sort_keeps_equal_timestamps_in_input_order() {
        let notes = vec![
            note(1, "a", 5, 0),
            note(2, "b", 1, 0),
            note(3, "c", 5, 0),
            note(4, "d", 1, 0),
        ];
        let asc = NoteOrder::Date(OrderType::Ascending).sorted(&notes);
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = NoteOrder::Date(OrderType::Descending).sorted(&notes);
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn direction_flips_applied_twice_return_the_same_order() {
        let notes = vec![
            note(1, "a", 3, 0),
            note(2, "b", 3, 0),
            note(3, "c", 1, 0),
            note(4, "d", 3, 0),
        ];
        let asc = NoteOrder::Date(OrderType::Ascending);
        let first = asc.sorted(&notes);
        let flipped = asc.with_order_type(OrderType::Descending).sorted(&first);
        let back = asc.sorted(&flipped);
        assert_eq!(ids(&first), ids(&back));
        assert_eq!(ids(&first), ids(&asc.sorted(&notes)));
    }

    #[test]
    fn color_sorts_numerically() {
        let notes = vec![note(1, "", 0, 30), note(2, "", 0, -4), note(3, "", 0, 7)];
        let sorted = NoteOrder::Color(OrderType::Ascending).sorted(&notes);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn same_field_ignores_direction() {
        let a = NoteOrder::Title(OrderType::Ascending);
        let b = NoteOrder::Title(OrderType::Descending);
        assert!(a.same_field(&b));
        assert_ne!(a, b);
        assert!(!a.same_field(&NoteOrder::Date(OrderType::Ascending)));
    }

    #[test]
    fn default_is_date_descending() {
        assert_eq!(NoteOrder::default(), NoteOrder::Date(OrderType::Descending));
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            NoteOrder::from_str("title:asc"),
            Ok(NoteOrder::Title(OrderType::Ascending))
        );
        assert_eq!(
            NoteOrder::from_str("Date:Descending"),
            Ok(NoteOrder::Date(OrderType::Descending))
        );
        assert_eq!(
            NoteOrder::from_str("color"),
            Ok(NoteOrder::Color(OrderType::Descending))
        );

        assert!(NoteOrder::from_str("").is_err());
        assert!(NoteOrder::from_str("size:asc").is_err());
        assert!(NoteOrder::from_str("title:up").is_err());
    }

    #[test]
    fn display_parses_back() {
        for order in [
            NoteOrder::Title(OrderType::Ascending),
            NoteOrder::Date(OrderType::Descending),
            NoteOrder::Color(OrderType::Ascending),
        ] {
            assert_eq!(NoteOrder::from_str(&order.to_string()), Ok(order));
        }
    }

    #[test]
    fn serializes_as_tagged_field() {
        let json = serde_json::to_string(&NoteOrder::Title(OrderType::Ascending)).unwrap();
        assert_eq!(json, r#"{"field":"title","direction":"ascending"}"#);
    }
}
