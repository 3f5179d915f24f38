//! Property-based tests for id splitting and request body building.

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use pdfvector_node::dispatch::build_body;
use pdfvector_node::models::{Selection, split_ids};

/// An id without commas or surrounding whitespace.
fn arb_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9./:_-]{1,20}"
}

/// Whitespace padding, possibly empty.
fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    /// Padded ids separated by commas (with blank segments mixed in) split back to the ids.
    #[test]
    fn split_recovers_ids_in_order(
        segments in proptest::collection::vec(
            (proptest::option::of(arb_id()), arb_padding(), arb_padding()),
            0..12,
        )
    ) {
        let raw = segments
            .iter()
            .map(|(id, left, right)| format!("{left}{}{right}", id.as_deref().unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",");

        let expected: Vec<String> = segments.iter().filter_map(|(id, _, _)| id.clone()).collect();

        prop_assert_eq!(split_ids(&raw), expected);
    }

    /// No piece produced by splitting is blank or padded.
    #[test]
    fn split_never_yields_blank_pieces(raw in "[ ,a-z]{0,40}") {
        for id in split_ids(&raw) {
            prop_assert!(!id.is_empty());
            prop_assert_eq!(id.trim(), id.as_str());
            prop_assert!(!id.contains(','));
        }
    }

    /// Fetch bodies carry the split ids and include fields only when selected.
    #[test]
    fn fetch_body_matches_split(
        ids in proptest::collection::vec(arb_id(), 1..6),
        with_fields in any::<bool>(),
    ) {
        let mut params = Map::new();
        params.insert("ids".to_string(), Value::String(ids.join(" , ")));
        if with_fields {
            params.insert("fields".to_string(), json!(["title"]));
        }

        let body = build_body(Selection::AcademicFetch, &params).unwrap().unwrap();

        prop_assert_eq!(&body["ids"], &json!(ids));
        prop_assert_eq!(body.get("fields").is_some(), with_fields);
    }

    /// Numeric search parameters pass through unchanged, in or out of bounds.
    #[test]
    fn search_numbers_pass_through(
        limit in -10i64..500,
        offset in -10i64..500,
        year_from in 1500i64..2200,
        year_to in 1500i64..2200,
    ) {
        let params = json!({
            "query": "q",
            "limit": limit,
            "offset": offset,
            "yearFrom": year_from,
            "yearTo": year_to,
        });

        let body = build_body(Selection::AcademicSearch, params.as_object().unwrap())
            .unwrap()
            .unwrap();

        prop_assert_eq!(&body["limit"], &json!(limit));
        prop_assert_eq!(&body["offset"], &json!(offset));
        prop_assert_eq!(&body["yearFrom"], &json!(year_from));
        prop_assert_eq!(&body["yearTo"], &json!(year_to));
    }
}
