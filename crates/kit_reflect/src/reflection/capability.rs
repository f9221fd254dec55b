/// A value that can report itself as a signed integer.
///
/// Conversion to integers consults this after the primitive fast path and
/// before falling back to reflection.
///
/// ```
/// use kit_reflect::{Inter, Reflect, impl_reflect_value};
///
/// #[derive(Clone, Debug, Default)]
/// struct Cents(u32);
///
/// impl Inter for Cents {
///     fn int(&self) -> i64 {
///         self.0 as i64 / 100
///     }
/// }
///
/// impl_reflect_value!(Cents(u32), inter);
///
/// let v = Cents(1250);
/// assert_eq!(v.as_inter().unwrap().int(), 12);
/// ```
pub trait Inter {
    fn int(&self) -> i64;
}

/// A value that can report itself as a 64-bit float.
pub trait Floater {
    fn float(&self) -> f64;
}
