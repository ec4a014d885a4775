/// Property-based tests for vector-vs-list coercion.
///
/// Strategies build `JsonValue` trees directly, render them to JSON text and
/// run them through `from_json`, so the parser's numeric tagging is part of
/// what is exercised. Doubles are generated with a fractional part so that
/// their text form is always re-tagged as a float.
use jsonparse_core::{
    classify, convert, from_json, JsonValue, OutputValue, ScalarKind, SemanticKind, TypedVector,
};
use proptest::prelude::*;

// ============================================================================
// Rendering
// ============================================================================

/// Render a `JsonValue` as JSON text (duplicate keys included).
fn render(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Int(i) => i.to_string(),
        JsonValue::Double(f) => format!("{f:?}"),
        JsonValue::String(s) => serde_json::to_string(s).unwrap(),
        JsonValue::Array(items) => {
            let parts: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", parts.join(","))
        }
        JsonValue::Object(members) => {
            let parts: Vec<String> = members
                .iter()
                .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap(), render(v)))
                .collect();
            format!("{{{}}}", parts.join(","))
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn arb_double() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000i64, 1u32..4u32).prop_filter_map("needs a fraction", |(m, d)| {
        let f = m as f64 / 10f64.powi(d as i32);
        (f.fract() != 0.0).then_some(f)
    })
}

fn arb_scalar_kind() -> impl Strategy<Value = ScalarKind> {
    prop_oneof![
        Just(ScalarKind::Bool),
        Just(ScalarKind::Int),
        Just(ScalarKind::Double),
        Just(ScalarKind::String),
    ]
}

fn arb_scalar_of(kind: ScalarKind) -> BoxedStrategy<JsonValue> {
    match kind {
        ScalarKind::Bool => any::<bool>().prop_map(JsonValue::Bool).boxed(),
        ScalarKind::Int => any::<i64>().prop_map(JsonValue::Int).boxed(),
        ScalarKind::Double => arb_double().prop_map(JsonValue::Double).boxed(),
        ScalarKind::String => "[a-zA-Z0-9 ,:\"\\\\]{0,12}".prop_map(JsonValue::String).boxed(),
    }
}

/// A non-empty array of one scalar kind, no nulls.
fn arb_uniform_array() -> impl Strategy<Value = (ScalarKind, Vec<JsonValue>)> {
    arb_scalar_kind().prop_flat_map(|kind| {
        prop::collection::vec(arb_scalar_of(kind), 1..20).prop_map(move |items| (kind, items))
    })
}

/// A non-empty array of one scalar kind where some slots are null and at
/// least one is not.
fn arb_array_with_nulls() -> impl Strategy<Value = (ScalarKind, Vec<JsonValue>)> {
    arb_scalar_kind().prop_flat_map(|kind| {
        prop::collection::vec(
            prop_oneof![1 => Just(JsonValue::Null), 2 => arb_scalar_of(kind)],
            1..20,
        )
        .prop_filter("needs a non-null", |items| {
            items.iter().any(|v| !matches!(v, JsonValue::Null))
        })
        .prop_map(move |items| (kind, items))
    })
}

fn arb_scalar() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        arb_scalar_of(ScalarKind::Bool),
        arb_scalar_of(ScalarKind::Int),
        arb_scalar_of(ScalarKind::Double),
        arb_scalar_of(ScalarKind::String),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{1,2}").unwrap()
}

/// Arbitrary trees up to a few levels deep; small key alphabet so duplicate
/// keys show up regularly.
fn arb_value() -> impl Strategy<Value = JsonValue> {
    arb_scalar().prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(JsonValue::Object),
        ]
    })
}

/// Slot-by-slot comparison of a vector with its source elements.
fn assert_slots(vector: &TypedVector, source: &[JsonValue]) {
    assert_eq!(vector.len(), source.len());
    match vector {
        TypedVector::Bool(slots) => {
            for (slot, v) in slots.iter().zip(source) {
                assert_eq!(*slot, v.as_bool());
            }
        }
        TypedVector::Int(slots) => {
            for (slot, v) in slots.iter().zip(source) {
                assert_eq!(*slot, v.as_i64());
            }
        }
        TypedVector::Double(slots) => {
            for (slot, v) in slots.iter().zip(source) {
                assert_eq!(*slot, v.as_f64());
            }
        }
        TypedVector::String(slots) => {
            for (slot, v) in slots.iter().zip(source) {
                assert_eq!(slot.as_deref(), v.as_str());
            }
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn uniform_arrays_keep_kind_and_values((kind, items) in arb_uniform_array()) {
        let text = render(&JsonValue::Array(items.clone()));
        let out = from_json(&text).unwrap();
        let vector = out.as_vector().expect("uniform array must be a vector");
        prop_assert_eq!(vector.kind(), kind);
        prop_assert_eq!(vector.null_count(), 0);
        assert_slots(vector, &items);
    }

    #[test]
    fn nulls_land_exactly_where_the_source_had_them((kind, items) in arb_array_with_nulls()) {
        let text = render(&JsonValue::Array(items.clone()));
        let out = from_json(&text).unwrap();
        let vector = out.as_vector().expect("scalar-with-nulls array must be a vector");
        prop_assert_eq!(vector.kind(), kind);
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(vector.is_null(i), matches!(item, JsonValue::Null));
        }
        assert_slots(vector, &items);
    }

    #[test]
    fn two_scalar_kinds_fall_back_to_list(
        a in arb_scalar(),
        b in arb_scalar(),
        rest in prop::collection::vec(arb_scalar(), 0..6),
    ) {
        let mut items = vec![a, b];
        items.extend(rest);
        let distinct_non_null: std::collections::HashSet<SemanticKind> = items
            .iter()
            .map(classify)
            .filter(|k| *k != SemanticKind::Null)
            .collect();
        prop_assume!(distinct_non_null.len() >= 2);

        let text = render(&JsonValue::Array(items.clone()));
        let out = from_json(&text).unwrap();
        let list = out.as_list().expect("mixed array must be a list");
        prop_assert_eq!(list.len(), items.len());
        for (converted, source) in list.iter().zip(&items) {
            prop_assert_eq!(converted, &convert(source).unwrap());
        }
    }

    #[test]
    fn objects_keep_order_and_duplicates(value in arb_value()) {
        let text = render(&value);
        let out = from_json(&text).unwrap();
        check_shape(&value, &out);
    }

    #[test]
    fn text_path_matches_tree_path(value in arb_value()) {
        let text = render(&value);
        prop_assert_eq!(from_json(&text).unwrap(), convert(&value).unwrap());
    }

    #[test]
    fn classify_is_referentially_transparent(value in arb_value()) {
        prop_assert_eq!(classify(&value), classify(&value.clone()));
    }
}

/// Mappings mirror objects member-for-member; arrays keep their length.
fn check_shape(source: &JsonValue, out: &OutputValue) {
    match (source, out) {
        (JsonValue::Object(members), OutputValue::Mapping(entries)) => {
            assert_eq!(members.len(), entries.len());
            for ((sk, sv), (ok, ov)) in members.iter().zip(entries) {
                assert_eq!(sk, ok);
                check_shape(sv, ov);
            }
        }
        (JsonValue::Array(items), OutputValue::Vector(vector)) => {
            assert_eq!(items.len(), vector.len());
        }
        (JsonValue::Array(items), OutputValue::List(list)) => {
            assert_eq!(items.len(), list.len());
            for (s, o) in items.iter().zip(list) {
                check_shape(s, o);
            }
        }
        (JsonValue::Null, OutputValue::Null) | (_, OutputValue::Scalar(_)) => {}
        (s, o) => panic!("shape mismatch: {s:?} -> {o:?}"),
    }
}
