//! Display-capability dispatch.
//!
//! Some types carry their own string rendering. The [`display_string!`]
//! macro picks it up: a type implementing [`std::fmt::Display`] renders
//! through `Display`, and a type with only a debug rendering falls back to
//! [`std::fmt::Debug`]. When a type implements both, `Display` wins.
//!
//! The selection happens at compile time through method resolution: the
//! `Display`-backed capability is implemented for [`Rendered`] itself, while
//! the `Debug`-backed one is implemented one auto-ref step away, so it is
//! only reached when the first does not apply.
//!
//! ```rust
//! use serde_stringify::{display_string, stringify, Value};
//! use std::net::Ipv4Addr;
//!
//! // Ipv4Addr implements both Display and Debug; Display wins.
//! let addr = Ipv4Addr::new(127, 0, 0, 1);
//! assert_eq!(display_string!(addr), "127.0.0.1");
//!
//! #[derive(Debug)]
//! struct Opaque(u32);
//!
//! // Only Debug available, so the debug rendering is used.
//! let value = Value::String(display_string!(Opaque(7)));
//! assert_eq!(stringify(&value), "Opaque(7)");
//! ```

use std::fmt;

/// Wrapper that carries a value through capability selection.
///
/// Not used directly; see [`display_string!`](crate::display_string).
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

/// Rendering through [`fmt::Display`]. Preferred when available.
pub trait DisplayCapability {
    fn render_string(&self) -> String;
}

impl<T: fmt::Display + ?Sized> DisplayCapability for Rendered<'_, T> {
    fn render_string(&self) -> String {
        self.0.to_string()
    }
}

/// Rendering through [`fmt::Debug`]. Reached only when no `Display`
/// implementation exists.
pub trait DebugCapability {
    fn render_string(&self) -> String;
}

impl<T: fmt::Debug + ?Sized> DebugCapability for &Rendered<'_, T> {
    fn render_string(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Renders a value through its own display capability.
///
/// Expands to a `String`: the `Display` rendering when the type implements
/// it, otherwise the `Debug` rendering. Fails to compile for types with
/// neither.
#[macro_export]
macro_rules! display_string {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::display::{DebugCapability as _, DisplayCapability as _};
        (&$crate::display::Rendered(&$value)).render_string()
    }};
}
