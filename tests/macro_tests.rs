//! Tests for the `value!` macro from outside the crate, where only the
//! exported surface is visible.

use serde_stringify::{stringify, value, Key, Map, Number, Value};

#[test]
fn test_literals() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
    assert_eq!(value!(7), Value::Number(Number::Int(7)));
    assert_eq!(value!(2.5), Value::Number(Number::Float(2.5)));
    assert_eq!(value!("text"), Value::String("text".to_string()));
}

#[test]
fn test_expressions_convert_through_serde() {
    let n = 40 + 2;
    assert_eq!(value!(n), Value::Number(Number::Int(42)));

    let name = String::from("Alice");
    assert_eq!(value!(name), Value::String("Alice".to_string()));

    let absent: Option<i32> = None;
    assert_eq!(value!(absent), Value::Null);
}

#[test]
fn test_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));
    assert_eq!(
        value!([1, "two", true, null]),
        Value::Array(vec![
            Value::Number(Number::Int(1)),
            Value::String("two".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_objects() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let obj = value!({"b": 2, "a": 1});
    let map = match obj {
        Value::Object(map) => map,
        other => panic!("expected object, got {:?}", other),
    };
    // insertion order is preserved in the model; sorting happens at render time
    let keys: Vec<&Key> = map.keys().collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_trailing_commas() {
    assert_eq!(value!([1, 2,]), value!([1, 2]));
    assert_eq!(value!({"a": 1,}), value!({"a": 1}));
}

#[test]
fn test_nested_and_rendered() {
    let config = value!({
        "retries": 3,
        "hosts": ["alpha", "beta"],
        "limits": {"cpu": 0.5, "mem": null}
    });

    assert_eq!(
        stringify(&config),
        "{hosts: [alpha, beta], limits: {cpu: 0.50, mem: <nil>}, retries: 3}"
    );
}
