use jsonmend_json_pointer::{
    evaluate, format_json_pointer, interpret, validate_json_pointer, PointerError,
};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn evaluate_reference_document() {
    let doc = json!({"a": 1, "b": {"c": 2, "d": [3, 4]}});

    assert_eq!(evaluate(&doc, "/a"), Ok(&json!(1)));
    assert_eq!(evaluate(&doc, "/b/c"), Ok(&json!(2)));
    assert_eq!(evaluate(&doc, "/b/d"), Ok(&json!([3, 4])));
    assert_eq!(evaluate(&doc, "/b/d/0"), Ok(&json!(3)));
    assert_eq!(evaluate(&doc, "/b/d/1"), Ok(&json!(4)));
}

#[test]
fn evaluate_array_root() {
    let doc = json!([{"id": 1}, {"id": 2}]);
    assert_eq!(evaluate(&doc, "/1/id"), Ok(&json!(2)));
    assert_eq!(
        evaluate(&doc, "/2"),
        Err(PointerError::ArrayIndexOutOfBounds("2".to_string()))
    );
}

#[test]
fn evaluate_rfc6901_examples() {
    let doc = json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    });

    let cases = [
        ("/foo", json!(["bar", "baz"])),
        ("/foo/0", json!("bar")),
        ("/", json!(0)),
        ("/a~1b", json!(1)),
        ("/c%d", json!(2)),
        ("/e^f", json!(3)),
        ("/g|h", json!(4)),
        ("/i\\j", json!(5)),
        ("/k\"l", json!(6)),
        ("/ ", json!(7)),
        ("/m~0n", json!(8)),
    ];
    for (pointer, expected) in cases {
        assert_eq!(evaluate(&doc, pointer), Ok(&expected), "pointer {pointer:?}");
    }
}

#[test]
fn error_messages_are_stable() {
    let doc = json!({"list": [1], "n": 5});

    let message = |pointer: &str| evaluate(&doc, pointer).unwrap_err().to_string();
    assert_eq!(message("/missing"), "Key not found: missing");
    assert_eq!(message("/list/3"), "Array index out of bounds: 3");
    assert_eq!(message("/list/one"), "Invalid array index: one");
    assert_eq!(
        message("/list/-"),
        "Invalid reference: '-' points to a non-existent array element."
    );
    assert_eq!(
        message("/n/x"),
        "Cannot resolve token 'x' on non-object/non-array value: 5"
    );
    assert_eq!(message("list"), "Invalid JSON pointer: list");
}

#[test]
fn validation_matches_evaluation() {
    let doc = json!({"foo": 1});
    for pointer in ["", "/foo", "foo", "#/foo"] {
        let valid = validate_json_pointer(pointer).is_ok();
        let invalid_pointer = matches!(evaluate(&doc, pointer), Err(PointerError::InvalidPointer(_)));
        assert_eq!(valid, !invalid_pointer, "pointer {pointer:?}");
    }
}

fn arb_doc() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z~/]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    });
    prop::collection::btree_map("[a-z~/]{1,3}", tree, 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// Every pointer to an existing location, paired with the value stored there.
fn all_locations(value: &Value, prefix: Vec<String>, out: &mut Vec<(String, Value)>) {
    out.push((format_json_pointer(&prefix), value.clone()));
    match value {
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                let mut path = prefix.clone();
                path.push(i.to_string());
                all_locations(item, path, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let mut path = prefix.clone();
                path.push(key.clone());
                all_locations(item, path, out);
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn evaluate_finds_every_location(doc in arb_doc()) {
        let mut locations = Vec::new();
        all_locations(&doc, Vec::new(), &mut locations);
        for (pointer, expected) in locations {
            prop_assert_eq!(evaluate(&doc, &pointer), Ok(&expected));
            // Evaluation never changes the document, so repeating it agrees.
            prop_assert_eq!(evaluate(&doc, &pointer), evaluate(&doc, &pointer));
        }
    }

    #[test]
    fn interpret_inverts_format(tokens in prop::collection::vec("[a-z~/0-9]{0,4}", 0..5)) {
        let pointer = format_json_pointer(&tokens);
        let it = interpret(&pointer);
        prop_assert!(it.is_well_formed());
        prop_assert_eq!(&it.tokens[1..], &tokens[..]);
    }
}
