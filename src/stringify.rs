//! The core rendering routine.
//!
//! Turns a [`Value`] into a `String`, honoring the effective [`Options`].
//! The routine is total: every value produces some string, nothing is
//! mutated, and no error channel exists.
//!
//! Dispatch order, first match wins:
//!
//! 1. Strings are returned verbatim.
//! 2. Booleans render as the literal words `true`/`false`.
//! 3. Null renders as the null text.
//! 4. Byte sequences are decoded as UTF-8 text (lossy on invalid input).
//! 5. Integers render in the configured radix with lowercase digits.
//! 6. Floats and complex numbers render per the float format and precision.
//! 7. Objects render as `{k1: v1, k2: v2}`, keys and values both rendered
//!    under the same effective options, with pair strings sorted
//!    lexicographically before joining, so storage iteration order never
//!    leaks into the output.
//! 8. Arrays render as `[e1, e2, e3]` in their original order.
//! 9. Null containers render as the null-object/null-array text.
//!
//! Recursion depth is bounded by the depth of the input; a [`Value`] tree
//! cannot be cyclic.

use crate::{FloatFormat, Key, Number, Options, Value};

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` with the given effective options.
pub(crate) fn render(value: &Value, options: &Options) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Null => options.null_text().to_string(),
        Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        Value::Number(n) => format_number(n, options),
        Value::Object(map) => {
            let mut pairs: Vec<String> = map
                .iter()
                .map(|(key, val)| {
                    format!("{}: {}", render_key(key, options), render(val, options))
                })
                .collect();
            // keys arrive in arbitrary storage order; sorting the rendered
            // pairs keeps the output deterministic
            pairs.sort_unstable();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Array(arr) => {
            let elements: Vec<String> = arr.iter().map(|e| render(e, options)).collect();
            format!("[{}]", elements.join(", "))
        }
        Value::NullObject => options.null_object_text().to_string(),
        Value::NullArray => options.null_array_text().to_string(),
    }
}

/// Renders an object key with the given effective options.
///
/// Keys follow the same rules as values of their kind: text keys pass
/// through verbatim and integer keys honor the configured radix.
pub(crate) fn render_key(key: &Key, options: &Options) -> String {
    match key {
        Key::String(s) => s.clone(),
        Key::Int(i) => format_int(*i, options.base()),
        Key::UInt(u) => format_uint(*u, options.base()),
        Key::Big(b) => b.to_str_radix(options.base()),
    }
}

/// Renders a number with the given effective options.
///
/// The radix applies to integer kinds only; float and complex kinds use the
/// float format and precision.
pub(crate) fn format_number(number: &Number, options: &Options) -> String {
    match number {
        Number::Int(i) => format_int(*i, options.base()),
        Number::UInt(u) => format_uint(*u, options.base()),
        Number::Big(bi) => bi.to_str_radix(options.base()),
        Number::Float(f) => format_float(*f, options.float_format(), options.precision()),
        Number::Complex(c) => {
            let re = format_float(c.re, options.float_format(), options.precision());
            let im = format_float(c.im, options.float_format(), options.precision());
            // the imaginary part always carries an explicit sign
            let sign = if im.starts_with('-') { "" } else { "+" };
            format!("({re}{sign}{im}i)")
        }
    }
}

fn format_int(n: i64, base: u32) -> String {
    if n < 0 {
        format!("-{}", format_uint(n.unsigned_abs(), base))
    } else {
        format_uint(n as u64, base)
    }
}

fn format_uint(mut n: u64, base: u32) -> String {
    if base == 10 {
        return n.to_string();
    }
    if n == 0 {
        return "0".to_string();
    }
    let base = u64::from(base);
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % base) as usize]);
        n /= base;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

fn format_float(f: f64, format: FloatFormat, precision: usize) -> String {
    match format {
        FloatFormat::Fixed => format!("{f:.precision$}"),
        FloatFormat::ScientificLower => format!("{f:.precision$e}"),
        FloatFormat::ScientificUpper => format!("{f:.precision$E}"),
        FloatFormat::Shortest => f.to_string(),
        FloatFormat::Hex => format_hex_float(f, precision),
    }
}

/// Hexadecimal-significand rendering, `[-]0x1.<digits>p±ee`.
///
/// Std has no counterpart for this form, so it is derived straight from the
/// f64 bit layout: normals carry an implicit leading 1, subnormals are
/// normalized first, and the fraction is rounded half-up at the requested
/// digit count.
fn format_hex_float(f: f64, precision: usize) -> String {
    if !f.is_finite() {
        return f.to_string();
    }

    let bits = f.to_bits();
    let sign = if bits >> 63 == 1 { "-" } else { "" };
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    if biased == 0 && fraction == 0 {
        return if precision == 0 {
            format!("{sign}0x0p+00")
        } else {
            format!("{sign}0x0.{}p+00", "0".repeat(precision))
        };
    }

    let (mut exp, mut frac) = if biased == 0 {
        // subnormal: shift the highest set bit up into the implicit-1 slot
        let top = 63 - i64::from(fraction.leading_zeros());
        let shifted = fraction << (52 - top);
        (top - 1074, shifted & ((1u64 << 52) - 1))
    } else {
        (biased - 1023, fraction)
    };

    let mut lead = 1u64;
    if precision < 13 {
        let drop = 52 - 4 * precision as u32;
        let rounded = frac + (1u64 << (drop - 1));
        if rounded >> 52 != 0 {
            // rounding carried into the integer digit: 2.0 * 2^e = 1.0 * 2^(e+1)
            lead = 1;
            frac = 0;
            exp += 1;
        } else {
            frac = (rounded >> drop) << drop;
        }
    }

    let mut out = format!("{sign}0x{lead}");
    if precision > 0 {
        out.push('.');
        for i in 0..precision {
            let digit = if 4 * (i + 1) <= 52 {
                (frac >> (52 - 4 * (i + 1))) & 0xf
            } else {
                0
            };
            out.push(char::from(DIGITS[digit as usize]));
        }
    }
    out.push_str(&format!("p{exp:+03}"));
    out
}
