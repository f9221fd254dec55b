use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by the `impl_reflect_*` macros. Manual implementations should
/// store the descriptor in a [`NonGenericTypeInfoCell`] or, for generic
/// types, a [`GenericTypeInfoCell`]:
///
/// ```
/// use kit_reflect::{
///     info::{ReflectKind, TypeInfo, Typed},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Meters(f64);
///
/// impl Typed for Meters {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::Float, "demo::Meters", "Meters"))
///     }
/// }
///
/// assert_eq!(Meters::type_info().short_name(), "demo::Meters");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Automatically implemented for every [`Typed`] type; it makes
/// `dyn Reflect` able to report its descriptor.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;

    /// Shortcut for `self.reflect_type_info().type_path()`.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
