//! Exact-width write views over numeric values.
//!
//! Writers go through 64-bit values and narrow with `as`, which wraps
//! integers and rounds floats, the same way a numeric cast does.

/// A mutable signed integer of any width.
pub enum IntMut<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

impl IntMut<'_> {
    /// Stores `val`, truncated to the target width.
    ///
    /// ```
    /// use kit_reflect::ops::IntMut;
    ///
    /// let mut x = 0_i8;
    /// IntMut::I8(&mut x).set_i64(300);
    /// assert_eq!(x, 44);
    /// ```
    #[inline]
    pub fn set_i64(&mut self, val: i64) {
        match self {
            Self::I8(v) => **v = val as i8,
            Self::I16(v) => **v = val as i16,
            Self::I32(v) => **v = val as i32,
            Self::I64(v) => **v = val,
            Self::Isize(v) => **v = val as isize,
        }
    }

    /// Returns the current value, widened.
    #[inline]
    pub fn get_i64(&self) -> i64 {
        match self {
            Self::I8(v) => **v as i64,
            Self::I16(v) => **v as i64,
            Self::I32(v) => **v as i64,
            Self::I64(v) => **v,
            Self::Isize(v) => **v as i64,
        }
    }
}

/// A mutable unsigned integer of any width.
pub enum UintMut<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

impl UintMut<'_> {
    /// Stores `val` reinterpreted as unsigned and truncated to the target width.
    ///
    /// ```
    /// use kit_reflect::ops::UintMut;
    ///
    /// let mut x = 0_u16;
    /// UintMut::U16(&mut x).set_i64(-1);
    /// assert_eq!(x, u16::MAX);
    /// ```
    #[inline]
    pub fn set_i64(&mut self, val: i64) {
        match self {
            Self::U8(v) => **v = val as u8,
            Self::U16(v) => **v = val as u16,
            Self::U32(v) => **v = val as u32,
            Self::U64(v) => **v = val as u64,
            Self::Usize(v) => **v = val as usize,
        }
    }

    /// Returns the current value, widened.
    #[inline]
    pub fn get_u64(&self) -> u64 {
        match self {
            Self::U8(v) => **v as u64,
            Self::U16(v) => **v as u64,
            Self::U32(v) => **v as u64,
            Self::U64(v) => **v,
            Self::Usize(v) => **v as u64,
        }
    }
}

/// A mutable float of either width.
pub enum FloatMut<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl FloatMut<'_> {
    /// Stores `val`, rounded to `f32` for the narrow variant.
    #[inline]
    pub fn set_f64(&mut self, val: f64) {
        match self {
            Self::F32(v) => **v = val as f32,
            Self::F64(v) => **v = val,
        }
    }

    #[inline]
    pub fn get_f64(&self) -> f64 {
        match self {
            Self::F32(v) => **v as f64,
            Self::F64(v) => **v,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FloatMut, IntMut, UintMut};

    #[test]
    fn narrowing() {
        let mut a = 0_i16;
        let mut w = IntMut::I16(&mut a);
        w.set_i64(70_000);
        assert_eq!(w.get_i64(), 4464);

        let mut b = 0_u32;
        let mut w = UintMut::U32(&mut b);
        w.set_i64(-2);
        assert_eq!(w.get_u64(), u32::MAX as u64 - 1);

        let mut c = 0_f32;
        let mut w = FloatMut::F32(&mut c);
        w.set_f64(0.1);
        assert_eq!(w.get_f64(), 0.1_f32 as f64);
    }
}
