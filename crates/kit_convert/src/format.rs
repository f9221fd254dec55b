//! `%G`-style float formatting.
//!
//! A float is written with `prec` significant digits, or with the fewest
//! digits that read back to the same value when `prec` is `None`. The
//! exponent form `d.dddE±dd` is used when the decimal exponent is below -4
//! or at least the precision (6 for the shortest form); otherwise the plain
//! form is used. Trailing zeros are never written.
//!
//! ```
//! use kit_convert::format::{format_g, format_g32};
//!
//! assert_eq!(format_g(1.5, None), "1.5");
//! assert_eq!(format_g(1e6, None), "1E+06");
//! assert_eq!(format_g(123456.0, None), "123456");
//! assert_eq!(format_g(0.00001, None), "1E-05");
//! assert_eq!(format_g(3.14159265, Some(3)), "3.14");
//! assert_eq!(format_g32(0.1, None), "0.1");
//! assert_eq!(format_g(f64::NEG_INFINITY, None), "-Inf");
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Formats a 64-bit float.
pub fn format_g(value: f64, prec: Option<usize>) -> String {
    if let Some(special) = special(value) {
        return special.into();
    }
    let sci = match prec {
        None => format!("{value:e}"),
        Some(prec) => format!("{:.*e}", prec.max(1) - 1, value),
    };
    from_scientific(&sci, prec)
}

/// Formats a 32-bit float, choosing the shortest digits at 32-bit precision.
pub fn format_g32(value: f32, prec: Option<usize>) -> String {
    if let Some(special) = special(value as f64) {
        return special.into();
    }
    let sci = match prec {
        None => format!("{value:e}"),
        Some(prec) => format!("{:.*e}", prec.max(1) - 1, value),
    };
    from_scientific(&sci, prec)
}

fn special(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("+Inf")
    } else if value == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

// Rewrites Rust's `{:e}` output, `-d.ddde-7`, in `%G` layout.
fn from_scientific(sci: &str, prec: Option<usize>) -> String {
    let (neg, sci) = match sci.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, sci),
    };
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa.bytes().filter(|c| *c != b'.').collect();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }

    let nd = digits.len() as i32;
    let point = exp + 1;
    let (mut prec, eprec) = match prec {
        None => (nd, 6),
        Some(prec) => {
            let prec = prec.max(1) as i32;
            if prec > nd && nd >= point {
                (prec, nd)
            } else {
                (prec, prec)
            }
        }
    };

    let mut out = String::with_capacity(nd as usize + 8);
    if neg {
        out.push('-');
    }

    if exp < -4 || exp >= eprec {
        prec = prec.min(nd);
        out.push(digits[0] as char);
        if prec > 1 {
            out.push('.');
            digits[1..prec as usize]
                .iter()
                .for_each(|c| out.push(*c as char));
        }
        out.push('E');
        out.push(if exp < 0 { '-' } else { '+' });
        let exp = exp.unsigned_abs();
        if exp < 10 {
            out.push('0');
        }
        out.push_str(&format!("{exp}"));
    } else {
        if prec > point {
            prec = nd;
        }
        let digit_at = |i: i32| -> char {
            if (0..nd).contains(&i) {
                digits[i as usize] as char
            } else {
                '0'
            }
        };

        if point > 0 {
            (0..point).for_each(|i| out.push(digit_at(i)));
        } else {
            out.push('0');
        }

        let frac = (prec - point).max(0);
        if frac > 0 {
            out.push('.');
            (0..frac).for_each(|i| out.push(digit_at(point + i)));
        }
    }
    out
}

// -----------------------------------------------------------------------------
// Tests
