//! Configuration options for stringification.
//!
//! This module provides types to customize rendered output:
//!
//! - [`Options`]: per-field-optional configuration with documented defaults
//! - [`FloatFormat`]: rendering style for floating-point and complex values
//!
//! Every field is optional. An unset field falls back to its default, and
//! [`Options::merge`] folds fragments together last-write-wins per field, so
//! a fragment that only sets `base` never clobbers a previously configured
//! placeholder.
//!
//! ## Examples
//!
//! ```rust
//! use serde_stringify::{stringify_with_options, FloatFormat, Options, Value};
//!
//! let options = Options::new().with_base(2);
//! assert_eq!(stringify_with_options(&Value::from(10), options), "1010");
//!
//! let options = Options::new()
//!     .with_float_format(FloatFormat::ScientificLower)
//!     .with_precision(3);
//! assert_eq!(stringify_with_options(&Value::from(1.0_f64), options), "1.000e0");
//! ```

/// Default integer radix.
pub const DEFAULT_BASE: u32 = 10;
/// Default number of fractional digits for float and complex values.
pub const DEFAULT_PRECISION: usize = 2;
/// Default text substituted for a null value.
pub const DEFAULT_NULL_TEXT: &str = "<nil>";
/// Default text substituted for a null object.
pub const DEFAULT_NULL_OBJECT_TEXT: &str = "{}";
/// Default text substituted for a null array.
pub const DEFAULT_NULL_ARRAY_TEXT: &str = "[]";

/// Rendering style for floating-point and complex values.
///
/// The configured [`Options::with_precision`] gives the number of digits
/// after the point for every style except [`FloatFormat::Shortest`], which
/// uses the shortest representation that round-trips.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{stringify_with_options, FloatFormat, Options, Value};
///
/// let v = Value::from(1234.5_f64);
/// let opt = |f| Options::new().with_float_format(f);
///
/// assert_eq!(stringify_with_options(&v, opt(FloatFormat::Fixed)), "1234.50");
/// assert_eq!(stringify_with_options(&v, opt(FloatFormat::ScientificLower)), "1.23e3");
/// assert_eq!(stringify_with_options(&v, opt(FloatFormat::ScientificUpper)), "1.23E3");
/// assert_eq!(stringify_with_options(&v, opt(FloatFormat::Shortest)), "1234.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// Plain decimal notation with a fixed number of fractional digits.
    #[default]
    Fixed,
    /// Scientific notation with a lowercase `e` exponent marker.
    ScientificLower,
    /// Scientific notation with an uppercase `E` exponent marker.
    ScientificUpper,
    /// The shortest representation that parses back to the same value.
    Shortest,
    /// Hexadecimal significand with a binary exponent, e.g. `0x1.8p+00`.
    Hex,
}

/// Configuration for the stringifier.
///
/// Constructed with [`Options::new`] and the `with_*` builder methods. Fields
/// left unset resolve to the `DEFAULT_*` constants at render time.
///
/// # Examples
///
/// ```rust
/// use serde_stringify::{FloatFormat, Options};
///
/// let options = Options::new()
///     .with_base(16)
///     .with_precision(4)
///     .with_null_text("N/A");
///
/// // Fragments merge field-by-field; the later write wins.
/// let merged = Options::new().with_base(2).merge(options);
/// assert_eq!(merged.base(), 16);
/// assert_eq!(merged.float_format(), FloatFormat::Fixed);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Options {
    base: Option<u32>,
    float_format: Option<FloatFormat>,
    precision: Option<usize>,
    null_text: Option<String>,
    null_object_text: Option<String>,
    null_array_text: Option<String>,
}

impl Options {
    /// Creates options with every field unset (all defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the radix used when rendering integer values.
    ///
    /// Only affects integer kinds; floats and complex numbers ignore it.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=36`.
    #[must_use]
    pub fn with_base(mut self, base: u32) -> Self {
        assert!((2..=36).contains(&base), "base must be in 2..=36");
        self.base = Some(base);
        self
    }

    /// Sets the rendering style for float and complex values.
    #[must_use]
    pub fn with_float_format(mut self, format: FloatFormat) -> Self {
        self.float_format = Some(format);
        self
    }

    /// Sets the number of fractional digits for float and complex values.
    ///
    /// Applies independently to the real and imaginary parts of a complex
    /// number. Ignored by [`FloatFormat::Shortest`].
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the text substituted for a null value.
    #[must_use]
    pub fn with_null_text(mut self, text: impl Into<String>) -> Self {
        self.null_text = Some(text.into());
        self
    }

    /// Sets the text substituted for a null object.
    #[must_use]
    pub fn with_null_object_text(mut self, text: impl Into<String>) -> Self {
        self.null_object_text = Some(text.into());
        self
    }

    /// Sets the text substituted for a null array.
    #[must_use]
    pub fn with_null_array_text(mut self, text: impl Into<String>) -> Self {
        self.null_array_text = Some(text.into());
        self
    }

    /// Merges `other` over `self`, field by field.
    ///
    /// Fields set in `other` win; fields unset in `other` keep whatever
    /// `self` had. Folding a sequence of fragments with `merge` therefore
    /// gives last-write-wins per field, with defaults filling the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_stringify::Options;
    ///
    /// let merged = Options::new()
    ///     .with_base(2)
    ///     .with_precision(4)
    ///     .merge(Options::new().with_base(16));
    ///
    /// assert_eq!(merged.base(), 16);
    /// assert_eq!(merged.precision(), 4);
    /// ```
    #[must_use]
    pub fn merge(mut self, other: Options) -> Self {
        if other.base.is_some() {
            self.base = other.base;
        }
        if other.float_format.is_some() {
            self.float_format = other.float_format;
        }
        if other.precision.is_some() {
            self.precision = other.precision;
        }
        if other.null_text.is_some() {
            self.null_text = other.null_text;
        }
        if other.null_object_text.is_some() {
            self.null_object_text = other.null_object_text;
        }
        if other.null_array_text.is_some() {
            self.null_array_text = other.null_array_text;
        }
        self
    }

    /// The effective integer radix.
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base.unwrap_or(DEFAULT_BASE)
    }

    /// The effective float rendering style.
    #[must_use]
    pub fn float_format(&self) -> FloatFormat {
        self.float_format.unwrap_or_default()
    }

    /// The effective number of fractional digits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// The effective null placeholder.
    #[must_use]
    pub fn null_text(&self) -> &str {
        self.null_text.as_deref().unwrap_or(DEFAULT_NULL_TEXT)
    }

    /// The effective null-object placeholder.
    #[must_use]
    pub fn null_object_text(&self) -> &str {
        self.null_object_text
            .as_deref()
            .unwrap_or(DEFAULT_NULL_OBJECT_TEXT)
    }

    /// The effective null-array placeholder.
    #[must_use]
    pub fn null_array_text(&self) -> &str {
        self.null_array_text
            .as_deref()
            .unwrap_or(DEFAULT_NULL_ARRAY_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert_eq!(options.base(), 10);
        assert_eq!(options.float_format(), FloatFormat::Fixed);
        assert_eq!(options.precision(), 2);
        assert_eq!(options.null_text(), "<nil>");
        assert_eq!(options.null_object_text(), "{}");
        assert_eq!(options.null_array_text(), "[]");
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_base(16)
            .with_float_format(FloatFormat::Hex)
            .with_precision(5)
            .with_null_text("N/A")
            .with_null_object_text("<no map>")
            .with_null_array_text("<no list>");

        assert_eq!(options.base(), 16);
        assert_eq!(options.float_format(), FloatFormat::Hex);
        assert_eq!(options.precision(), 5);
        assert_eq!(options.null_text(), "N/A");
        assert_eq!(options.null_object_text(), "<no map>");
        assert_eq!(options.null_array_text(), "<no list>");
    }

    #[test]
    fn test_merge_last_write_wins() {
        let merged = Options::new()
            .with_base(2)
            .merge(Options::new().with_base(8))
            .merge(Options::new().with_precision(6));

        assert_eq!(merged.base(), 8);
        assert_eq!(merged.precision(), 6);
    }

    #[test]
    fn test_merge_unset_fields_do_not_override() {
        let configured = Options::new().with_null_text("N/A").with_precision(7);
        let merged = configured.merge(Options::new());

        assert_eq!(merged.null_text(), "N/A");
        assert_eq!(merged.precision(), 7);
    }

    #[test]
    fn test_precision_zero_is_a_real_setting() {
        let options = Options::new().with_precision(0);
        assert_eq!(options.precision(), 0);

        let merged = Options::new().with_precision(4).merge(options);
        assert_eq!(merged.precision(), 0);
    }

    #[test]
    #[should_panic(expected = "base must be in 2..=36")]
    fn test_base_out_of_range_panics() {
        let _ = Options::new().with_base(37);
    }
}
