//! Customizing output with Options.
//!
//! Run with: cargo run --example custom_options

use serde_stringify::{stringify_with_options, FloatFormat, Options, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let n = Value::from(255);

    // Integer radix
    println!("Integer bases:");
    for base in [2, 8, 10, 16, 36] {
        let options = Options::new().with_base(base);
        println!("  base {:2}: {}", base, stringify_with_options(&n, options));
    }
    println!();

    // Float styles and precision
    let f = Value::from(12345.6789);
    println!("Float styles:");
    let fixed = Options::new().with_precision(3);
    println!("  fixed:      {}", stringify_with_options(&f, fixed));
    let sci = Options::new().with_float_format(FloatFormat::ScientificLower);
    println!("  scientific: {}", stringify_with_options(&f, sci));
    let hex = Options::new().with_float_format(FloatFormat::Hex);
    println!("  hex:        {}", stringify_with_options(&f, hex));
    let shortest = Options::new().with_float_format(FloatFormat::Shortest);
    println!("  shortest:   {}\n", stringify_with_options(&f, shortest));

    // Placeholders for null values and null containers
    println!("Placeholders:");
    let placeholders = Options::new()
        .with_null_text("N/A")
        .with_null_object_text("<no map>")
        .with_null_array_text("<no list>");
    println!(
        "  null:        {}",
        stringify_with_options(&Value::Null, placeholders.clone())
    );
    println!(
        "  null object: {}",
        stringify_with_options(&Value::NullObject, placeholders.clone())
    );
    println!(
        "  null array:  {}\n",
        stringify_with_options(&Value::NullArray, placeholders)
    );

    // Fragments merge field-by-field, last write wins
    let job_defaults = Options::new().with_precision(4);
    let per_call = Options::new().with_null_text("unset");
    let effective = job_defaults.merge(per_call);
    println!("Merged fragments:");
    println!(
        "  float: {}",
        stringify_with_options(&Value::from(1.0), effective.clone())
    );
    println!(
        "  null:  {}",
        stringify_with_options(&Value::Null, effective)
    );

    Ok(())
}
