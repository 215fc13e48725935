//! # serde_stringify
//!
//! Total, deterministic stringification of arbitrary values, powered by Serde.
//!
//! ## What does it do?
//!
//! [`stringify`] converts any [`Value`] into a human-readable string. It never
//! fails: every input produces some output, with configurable placeholders
//! standing in for null values and null containers. Arbitrary Rust types enter
//! the model through Serde ([`to_value`]), so anything with a `Serialize`
//! implementation can be rendered without writing a conversion by hand.
//!
//! ## Key Features
//!
//! - **Total**: no error channel in the core routine; null values, null
//!   containers, and non-UTF-8 bytes all render as some string
//! - **Deterministic**: object output is sorted by rendered pair, so a map
//!   with randomized iteration order always renders identically
//! - **Configurable numerics**: integer radix 2–36, fixed/scientific/
//!   shortest/hex float styles, per-call precision, complex numbers as
//!   `(re+imi)`
//! - **Serde Compatible**: `#[derive(Serialize)]` types render through their
//!   serde shape
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_stringify = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Rendering values
//!
//! ```rust
//! use serde_stringify::{stringify, stringify_with_options, Options, Value, value};
//!
//! assert_eq!(stringify(&Value::from("hello")), "hello");
//! assert_eq!(stringify(&Value::from(true)), "true");
//! assert_eq!(stringify(&Value::Null), "<nil>");
//! assert_eq!(stringify(&value!([1, 2, 3])), "[1, 2, 3]");
//! assert_eq!(stringify(&value!({"two": 2, "one": 1})), "{one: 1, two: 2}");
//!
//! let options = Options::new().with_base(2);
//! assert_eq!(stringify_with_options(&Value::from(10), options), "1010");
//! ```
//!
//! ### Rendering your own types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_stringify::stringify_any;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! assert_eq!(
//!     stringify_any(&user).unwrap(),
//!     "{active: true, id: 123, name: Alice}"
//! );
//! ```
//!
//! ### Options merge field-by-field
//!
//! ```rust
//! use serde_stringify::{stringify_with_options, Options, Value};
//!
//! let defaults_for_job = Options::new().with_precision(4);
//! let per_call = Options::new().with_null_text("N/A");
//!
//! // Unset fields never override; set fields win last-write.
//! let effective = defaults_for_job.merge(per_call);
//! assert_eq!(stringify_with_options(&Value::from(1.0), effective.clone()), "1.0000");
//! assert_eq!(stringify_with_options(&Value::Null, effective), "N/A");
//! ```
//!
//! ## Determinism
//!
//! Ordered-mapping storage makes no iteration-order promise, so the renderer
//! sorts the `"key: value"` pair strings of every object before joining them.
//! Two calls with equal value and equal effective options produce
//! byte-identical output.
//!
//! ## Concurrency
//!
//! The renderer only reads its inputs and allocates fresh output; it is safe
//! to call from any number of threads without synchronization.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - rendering primitives and structs
//! - **`custom_options.rs`** - radix, precision, and placeholder control
//! - **`dynamic_values.rs`** - building values with the `value!` macro
//!
//! Run any demo with: `cargo run --example <name>`

pub mod display;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

mod stringify;

pub use error::{Error, Result};
pub use map::{Key, Map};
pub use options::{FloatFormat, Options};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Renders a [`Value`] with default options.
///
/// Total and side-effect-free: every value produces some string.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify, Value};
///
/// assert_eq!(stringify(&Value::from(42)), "42");
/// assert_eq!(stringify(&Value::Null), "<nil>");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    stringify_with_options(value, Options::default())
}

/// Renders a [`Value`] with the given options.
///
/// Unset option fields resolve to their defaults; see [`Options`].
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify_with_options, Options, Value};
///
/// let options = Options::new().with_base(16);
/// assert_eq!(stringify_with_options(&Value::from(255), options), "ff");
/// ```
#[must_use]
pub fn stringify_with_options(value: &Value, options: Options) -> String {
    stringify::render(value, &options)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Structs and maps become objects, sequences become arrays, `()`/`None`
/// become null. See the [`ser`] module for the full mapping.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_stringify::to_value;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value's own `Serialize` implementation fails, or
/// if a map key has no string form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Renders any `T: Serialize` with default options.
///
/// Shorthand for [`to_value`] followed by [`stringify`].
///
/// # Errors
///
/// Returns an error only if the conversion to [`Value`] fails; rendering
/// itself cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_any<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    stringify_any_with_options(value, Options::default())
}

/// Renders any `T: Serialize` with the given options.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify_any_with_options, Options};
///
/// let options = Options::new().with_base(2);
/// assert_eq!(stringify_any_with_options(&vec![1, 2, 3], options).unwrap(), "[1, 10, 11]");
/// ```
///
/// # Errors
///
/// Returns an error only if the conversion to [`Value`] fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_any_with_options<T>(value: &T, options: Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(stringify_with_options(&to_value(value)?, options))
}

/// Renders a [`Value`] with default options and writes it to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    stringify_to_writer_with_options(writer, value, Options::default())
}

/// Renders a [`Value`] with the given options and writes it to `writer`.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify_to_writer, Value};
///
/// let mut buffer = Vec::new();
/// stringify_to_writer(&mut buffer, &Value::from(42)).unwrap();
/// assert_eq!(buffer, b"42");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_to_writer_with_options<W>(
    mut writer: W,
    value: &Value,
    options: Options,
) -> Result<()>
where
    W: io::Write,
{
    let rendered = stringify_with_options(value, options);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
