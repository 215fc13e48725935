//! Error types for the serde boundary.
//!
//! The core stringifier is total and never returns an error; every `Value`
//! renders to some string. Errors only arise at the edges:
//!
//! - **Serde conversion**: a `Serialize` implementation may fail on its own,
//!   or supply a map key that has no string form
//! - **I/O**: writing rendered output to a `std::io::Write` sink
//!
//! ## Examples
//!
//! ```rust
//! use serde_stringify::{to_value, Error};
//! use std::collections::HashMap;
//!
//! // Map keys must be string-like; a vec key cannot be rendered as one.
//! let bad: HashMap<Vec<i32>, i32> = HashMap::from([(vec![1], 2)]);
//! assert!(matches!(to_value(&bad), Err(Error::InvalidKey(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced while converting values through serde or writing output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),

    /// Map key that cannot be represented as a string
    #[error("invalid map key: {0}")]
    InvalidKey(String),

    /// Error raised by a foreign `Serialize`/`Deserialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error from a sink failure.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error for a map key kind that has no string form.
    pub fn invalid_key(kind: &str) -> Self {
        Error::InvalidKey(kind.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stringify::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
