//! Property tests for tool result rendering
//!
//! Whatever JSON the Safe service returns must come back out of a tool call
//! as the same value, with object keys in their original order and numbers
//! in their original literal form.

use proptest::prelude::*;
use safe_mcp::tools::render_text;
use serde_json::{json, Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 _\\-]{0,16}".prop_map(Value::String),
        "0x[0-9a-f]{0,64}".prop_map(Value::String),
        // Literals beyond f64 precision, exponents and trailing zeros
        "-?[1-9][0-9]{19,40}|[1-9]e[0-9]{1,2}|[0-9]\\.[0-9]{1,4}0"
            .prop_map(|literal| serde_json::from_str::<Value>(&literal).unwrap()),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-zA-Z]{1,10}", inner), 0..8).prop_map(|entries| {
                Value::Object(entries.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn rendered_text_parses_back_to_the_same_value(value in arb_json()) {
        let text = render_text(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&text).unwrap();

        // Compact encodings compare key order as well as content
        prop_assert_eq!(
            serde_json::to_string(&reparsed).unwrap(),
            serde_json::to_string(&value).unwrap()
        );
    }

    #[test]
    fn number_literals_survive_rendering(literal in "-?[1-9][0-9]{19,40}|[1-9]E-?[0-9]{1,2}|[0-9]\\.[0-9]{1,6}0") {
        let value: Value = serde_json::from_str(&format!("{{\"n\":{literal}}}")).unwrap();
        let text = render_text(&value).unwrap();

        prop_assert_eq!(text, format!("{{\n  \"n\": {literal}\n}}"));
    }

    #[test]
    fn rendering_is_deterministic(value in arb_json()) {
        prop_assert_eq!(render_text(&value).unwrap(), render_text(&value).unwrap());
    }

    #[test]
    fn rendering_uses_two_space_indentation(value in arb_json()) {
        prop_assert_eq!(
            render_text(&value).unwrap(),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }
}
