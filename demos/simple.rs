//! Basic value stringification.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_stringify::{stringify, stringify_any, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Primitives render directly
    println!("string: {}", stringify(&Value::from("hello")));
    println!("bool:   {}", stringify(&Value::from(true)));
    println!("int:    {}", stringify(&Value::from(42)));
    println!("float:  {}", stringify(&Value::from(2.5)));
    println!("null:   {}\n", stringify(&Value::Null));

    // Any Serialize type renders through its serde shape
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    println!("users: {}", stringify_any(&users)?);

    // Object keys come out sorted, so maps render deterministically
    let scores = std::collections::HashMap::from([("bob", 7), ("alice", 9)]);
    println!("scores: {}", stringify_any(&scores)?);

    Ok(())
}
