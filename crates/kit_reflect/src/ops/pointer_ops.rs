use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Pointer

/// An indirection to another reflected value.
///
/// Covers owned boxes, optional values (where `None` is the nil pointer)
/// and shared references. A pointer is writable when
/// [`pointee_mut`](Pointer::pointee_mut) hands out its target.
///
/// ```
/// use kit_reflect::{Reflect, ops::{Pointer, ReflectRef}};
///
/// let some: Option<i32> = Some(3);
/// let none: Option<i32> = None;
///
/// assert!(!some.is_null());
/// assert!(none.is_null());
///
/// let ReflectRef::Int(v) = some.pointee().unwrap().reflect_ref() else { unreachable!() };
/// assert_eq!(v, 3);
/// ```
pub trait Pointer: Reflect {
    /// Returns the target, `None` for the nil pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the target mutably.
    ///
    /// `None` for the nil pointer and for read-only indirections.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` for the nil pointer.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }

    /// Returns the descriptor of the target type.
    fn pointee_info(&self) -> &'static TypeInfo;
}
