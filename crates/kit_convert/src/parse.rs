//! Text grammars accepted by the conversions.
//!
//! - [`parse_bool`]: `1 t T TRUE true True` and `0 f F FALSE false False`.
//! - [`parse_int`]: an optional sign, then a base prefix `0x` (16), `0b`
//!   (2), `0o` (8) or a bare leading `0` (8), otherwise decimal. Prefix
//!   letters are case-insensitive and `_` may separate digits. The result
//!   must fit in an `i64`.
//! - [`parse_f64`] and [`parse_f32`]: decimal and scientific literals plus
//!   `inf`, `infinity` and `nan`. A finite literal too large for the target
//!   precision fails instead of becoming infinite.

/// Parses a boolean literal.
///
/// ```
/// use kit_convert::parse::parse_bool;
///
/// assert_eq!(parse_bool("T"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a signed integer, inferring the base from its prefix.
///
/// ```
/// use kit_convert::parse::parse_int;
///
/// assert_eq!(parse_int("0x1F"), Some(31));
/// assert_eq!(parse_int("-0b101"), Some(-5));
/// assert_eq!(parse_int("017"), Some(15));
/// assert_eq!(parse_int("1_000"), Some(1000));
/// assert_eq!(parse_int("9223372036854775808"), None);
/// ```
pub fn parse_int(s: &str) -> Option<i64> {
    let (neg, unsigned) = match s.as_bytes().first()? {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_uint(unsigned)?;

    if neg {
        if magnitude > 1_u64 << 63 {
            None
        } else {
            Some((magnitude as i64).wrapping_neg())
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_uint(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    let (base, digits): (u64, &[u8]) = match bytes {
        [] => return None,
        [b'0', prefix, rest @ ..] if !rest.is_empty() => match prefix.to_ascii_lowercase() {
            b'b' => (2, rest),
            b'o' => (8, rest),
            b'x' => (16, rest),
            _ => (8, &bytes[1..]),
        },
        [b'0', rest @ ..] => (8, rest),
        _ => (10, bytes),
    };

    let mut n: u64 = 0;
    let mut underscores = false;
    for &c in digits {
        let d = match c {
            b'_' => {
                underscores = true;
                continue;
            }
            b'0'..=b'9' => c - b'0',
            b'a'..=b'z' | b'A'..=b'Z' => c.to_ascii_lowercase() - b'a' + 10,
            _ => return None,
        };
        if u64::from(d) >= base {
            return None;
        }
        n = n.checked_mul(base)?.checked_add(u64::from(d))?;
    }

    if underscores && !underscore_ok(s) {
        return None;
    }
    Some(n)
}

// `_` must sit between digits, where a base prefix counts as a digit.
fn underscore_ok(s: &str) -> bool {
    #[derive(PartialEq, Eq, Clone, Copy)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut s = s.as_bytes();
    if let [b'+' | b'-', rest @ ..] = s {
        s = rest;
    }

    let mut saw = Saw::Start;
    let mut hex = false;
    if let [b'0', prefix, rest @ ..] = s
        && matches!(prefix.to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        hex = prefix.eq_ignore_ascii_case(&b'x');
        saw = Saw::Digit;
        s = rest;
    }

    for &c in s {
        if c.is_ascii_digit() || (hex && c.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if c == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else if saw == Saw::Underscore {
            return false;
        } else {
            saw = Saw::Other;
        }
    }
    saw != Saw::Underscore
}

/// Parses a 64-bit float.
///
/// ```
/// use kit_convert::parse::parse_f64;
///
/// assert_eq!(parse_f64("1.5e3"), Some(1500.0));
/// assert_eq!(parse_f64("-Inf"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_f64("1e400"), None);
/// assert_eq!(parse_f64("1,5"), None);
/// ```
pub fn parse_f64(s: &str) -> Option<f64> {
    if !is_float_literal(s) {
        return None;
    }
    let v: f64 = s.parse().ok()?;
    if v.is_infinite() && !is_inf_literal(s) {
        return None;
    }
    Some(v)
}

/// Parses a 32-bit float, rounding once from the decimal text.
///
/// ```
/// use kit_convert::parse::parse_f32;
///
/// assert_eq!(parse_f32("0.1"), Some(0.1_f32));
/// assert_eq!(parse_f32("1e39"), None);
/// ```
pub fn parse_f32(s: &str) -> Option<f32> {
    if !is_float_literal(s) {
        return None;
    }
    let v: f32 = s.parse().ok()?;
    if v.is_infinite() && !is_inf_literal(s) {
        return None;
    }
    Some(v)
}

// `nan` takes no sign.
fn is_float_literal(s: &str) -> bool {
    match s.as_bytes() {
        [b'+' | b'-', rest @ ..] => !rest.eq_ignore_ascii_case(b"nan"),
        _ => true,
    }
}

fn is_inf_literal(s: &str) -> bool {
    let s = s.trim_start_matches(['+', '-']);
    s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity")
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{parse_bool, parse_f32, parse_f64, parse_int};

    #[test]
    fn bools() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Some(true), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Some(false), "{s}");
        }
        for s in ["", "yes", "tRUE", " true", "2"] {
            assert_eq!(parse_bool(s), None, "{s}");
        }
    }

    #[test]
    fn ints() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-0"), Some(0));
        assert_eq!(parse_int("+42"), Some(42));
        assert_eq!(parse_int("0X1f"), Some(31));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("0B11"), Some(3));
        assert_eq!(parse_int("-0x_1F"), Some(-31));
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn bad_ints() {
        for s in [
            "", "-", "+", "0x", "0b2", "08", "1.5", "12a", "0x-1", "--1", "1__0", "_1", "1_",
            "0x1F_", " 1", "not a number", "9223372036854775808", "-9223372036854775809",
            "18446744073709551616",
        ] {
            assert_eq!(parse_int(s), None, "{s}");
        }
    }

    #[test]
    fn floats() {
        assert_eq!(parse_f64("3.25"), Some(3.25));
        assert_eq!(parse_f64(".5"), Some(0.5));
        assert_eq!(parse_f64("5."), Some(5.0));
        assert_eq!(parse_f64("-2E-3"), Some(-0.002));
        assert_eq!(parse_f64("+infinity"), Some(f64::INFINITY));
        assert!(parse_f64("NaN").unwrap().is_nan());
        assert_eq!(parse_f64("-nan"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("1e"), None);

        assert_eq!(parse_f32("3.4028235e38"), Some(f32::MAX));
        assert_eq!(parse_f32("Inf"), Some(f32::INFINITY));
        assert_eq!(parse_f32("3.5e38"), None);
        assert_eq!(parse_f64("3.5e38"), Some(3.5e38));
    }
}
