#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Capability traits

/// A type that can report its value as a boolean.
pub trait Booler {
    /// Returns the boolean representation of the value.
    fn bool(&self) -> bool;
}

/// A [`Booler`] that can also set its value from a boolean.
pub trait BoolSetter: Booler {
    /// Sets the value from its boolean representation.
    fn set_bool(&mut self, val: bool);
}

impl Booler for bool {
    #[inline]
    fn bool(&self) -> bool {
        *self
    }
}

impl BoolSetter for bool {
    #[inline]
    fn set_bool(&mut self, val: bool) {
        *self = val;
    }
}

// -----------------------------------------------------------------------------
// bool -> X

/// Converts a bool to `1.0` (true) or `0.0` (false).
#[inline]
pub const fn to_f32(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

/// Converts a bool to `1.0` (true) or `0.0` (false).
#[inline]
pub const fn to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Converts a bool to `1` (true) or `0` (false).
#[inline]
pub const fn to_int(b: bool) -> isize {
    b as isize
}

/// Converts a bool to `1` (true) or `0` (false).
#[inline]
pub const fn to_i32(b: bool) -> i32 {
    b as i32
}

/// Converts a bool to `1` (true) or `0` (false).
#[inline]
pub const fn to_i64(b: bool) -> i64 {
    b as i64
}

/// Converts a bool to `"true"` or `"false"`.
#[inline]
pub const fn to_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

// -----------------------------------------------------------------------------
// X -> bool

/// `0` is false, everything else is true.
#[inline]
pub fn from_f32(v: f32) -> bool {
    v != 0.0
}

/// `0` is false, everything else is true.
#[inline]
pub fn from_f64(v: f64) -> bool {
    v != 0.0
}

/// `0` is false, everything else is true.
#[inline]
pub const fn from_int(v: isize) -> bool {
    v != 0
}

/// `0` is false, everything else is true.
#[inline]
pub const fn from_i32(v: i32) -> bool {
    v != 0
}

/// `0` is false, everything else is true.
#[inline]
pub const fn from_i64(v: i64) -> bool {
    v != 0
}

/// Only the exact text `"true"` is true.
///
/// This is deliberately narrower than the literal grammar used by the
/// conversion engine, which also accepts `"1"`, `"T"`, `"True"` and so on.
#[inline]
pub fn from_str(v: &str) -> bool {
    v == "true"
}

// -----------------------------------------------------------------------------
// Tests
