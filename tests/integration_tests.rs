use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_stringify::{
    display_string, stringify, stringify_any, stringify_any_with_options, stringify_to_writer,
    to_value, Number, Options, Value,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Order {
    order_id: u32,
    customer: User,
    total: f64,
}

#[derive(Serialize)]
enum Status {
    Pending,
    Shipped { carrier: String },
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    assert_eq!(
        stringify_any(&user).unwrap(),
        "{active: true, id: 123, name: Alice, tags: [admin, developer]}"
    );
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 7,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        total: 59.98,
    };

    assert_eq!(
        stringify_any(&order).unwrap(),
        "{customer: {active: true, id: 123, name: Alice, tags: [vip]}, order_id: 7, total: 59.98}"
    );
}

#[test]
fn test_enum_variants() {
    assert_eq!(stringify_any(&Status::Pending).unwrap(), "Pending");
    assert_eq!(
        stringify_any(&Status::Shipped {
            carrier: "DHL".to_string()
        })
        .unwrap(),
        "{Shipped: {carrier: DHL}}"
    );
}

#[test]
fn test_option_fields_render_as_null_text() {
    #[derive(Serialize)]
    struct Profile {
        nickname: Option<String>,
    }

    assert_eq!(
        stringify_any(&Profile { nickname: None }).unwrap(),
        "{nickname: <nil>}"
    );
    assert_eq!(
        stringify_any_with_options(
            &Profile { nickname: None },
            Options::new().with_null_text("unset")
        )
        .unwrap(),
        "{nickname: unset}"
    );
}

#[test]
fn test_hashmap_and_btreemap_agree() {
    let hashed: HashMap<String, i32> =
        HashMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
    let ordered: BTreeMap<String, i32> =
        BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);

    assert_eq!(
        stringify_any(&hashed).unwrap(),
        stringify_any(&ordered).unwrap()
    );
    assert_eq!(stringify_any(&ordered).unwrap(), "{a: 1, b: 2}");
}

#[test]
fn test_integer_keyed_map() {
    let map: BTreeMap<u8, &str> = BTreeMap::from([(1, "one"), (10, "ten")]);
    assert_eq!(stringify_any(&map).unwrap(), "{1: one, 10: ten}");
}

#[test]
fn test_to_value_then_stringify_equals_stringify_any() {
    let user = User {
        id: 1,
        name: "Bob".to_string(),
        active: false,
        tags: vec![],
    };
    let via_value = stringify(&to_value(&user).unwrap());
    assert_eq!(via_value, stringify_any(&user).unwrap());
}

#[test]
fn test_chrono_date_enters_as_display_string() {
    let date: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-06-01T12:30:00Z")
        .unwrap()
        .with_timezone(&Utc);

    let value = Value::from(date);
    assert_eq!(stringify(&value), "2024-06-01T12:30:00+00:00");

    // chrono types also flow through the display capability
    assert_eq!(display_string!(date), "2024-06-01 12:30:00 UTC");
}

#[test]
fn test_display_capability_feeds_the_model() {
    let addr = std::net::Ipv4Addr::new(10, 0, 0, 1);
    let value = Value::String(display_string!(addr));
    assert_eq!(stringify(&value), "10.0.0.1");
}

#[test]
fn test_wide_and_unsigned_integers_survive() {
    assert_eq!(
        stringify_any(&u64::MAX).unwrap(),
        "18446744073709551615"
    );
    assert_eq!(
        stringify_any(&(1u128 << 70)).unwrap(),
        "1180591620717411303424"
    );
    assert_eq!(stringify_any(&i64::MIN).unwrap(), "-9223372036854775808");
}

#[test]
fn test_numbers_from_serde_match_direct_construction() {
    assert_eq!(to_value(&42i32).unwrap(), Value::Number(Number::Int(42)));
    assert_eq!(to_value(&42u32).unwrap(), Value::Number(Number::UInt(42)));
    assert_eq!(
        to_value(&1.25f64).unwrap(),
        Value::Number(Number::Float(1.25))
    );
}

#[test]
fn test_writer_round_trip() {
    let mut buffer = Vec::new();
    let value = to_value(&vec!["a", "b"]).unwrap();
    stringify_to_writer(&mut buffer, &value).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "[a, b]");
}

#[test]
fn test_json_value_interop() {
    // A Value deserialized from JSON renders like the same tree built here.
    let from_json: Value = serde_json::from_str(r#"{"n": 1, "s": "x", "l": [true, null]}"#).unwrap();
    assert_eq!(stringify(&from_json), "{l: [true, <nil>], n: 1, s: x}");
}

#[test]
fn test_same_input_same_output() {
    let value = to_value(&Order {
        order_id: 1,
        customer: User {
            id: 2,
            name: "Eve".to_string(),
            active: true,
            tags: vec!["x".to_string()],
        },
        total: 1.5,
    })
    .unwrap();

    let first = stringify(&value);
    for _ in 0..10 {
        assert_eq!(stringify(&value), first);
    }
}
