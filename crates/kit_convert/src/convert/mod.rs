//! Single-target conversions.
//!
//! Each conversion resolves its input in three tiers:
//!
//! 1. **Exact types**: common concrete types, held directly or in a `Box`,
//!    are converted without any reflection.
//! 2. **Capabilities**: [`Inter`](kit_reflect::Inter) for integers,
//!    [`Floater`](kit_reflect::Floater) for floats and `Display` for
//!    strings.
//! 3. **Reflection**: pointers are followed and the value is converted by
//!    its [`ReflectRef`](kit_reflect::ops::ReflectRef) view.
//!
//! Nil values, see [`is_nil`](crate::is_nil), fail every conversion except
//! the string ones, which render them as `"nil"`.

use alloc::boxed::Box;
use core::any::Any;

use kit_reflect::Reflect;

mod to_bool;
mod to_float;
mod to_int;
mod to_string;

pub use to_bool::to_bool;
pub use to_float::{to_float, to_float32};
pub use to_int::to_int;
pub use to_string::{to_string, to_string_prec};

/// Returns the value as a `T`, held either directly or through a `Box`.
#[inline]
fn exact<T: Any>(value: &dyn Reflect) -> Option<&T> {
    match value.downcast_ref::<T>() {
        Some(v) => Some(v),
        None => value.downcast_ref::<Box<T>>().map(|v| &**v),
    }
}

/// Returns from the enclosing function on the first type that matches.
macro_rules! exact_cases {
    ($value:expr; $($ty:ty => |$v:ident| $out:expr;)+) => {
        $(
            if let ::core::option::Option::Some($v) = $crate::convert::exact::<$ty>($value) {
                return $out;
            }
        )+
    };
}

pub(crate) use exact_cases;
