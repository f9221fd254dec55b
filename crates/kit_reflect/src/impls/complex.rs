use num_complex::{Complex, Complex64};

use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, impl_serde_reflect, impl_simple_type_reflect};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

macro_rules! impl_reflect_complex {
    ($($float:ident),*) => {$(
        impl Typed for Complex<$float> {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::new::<Self>(
                        ReflectKind::Complex,
                        concat!("num_complex::Complex<", stringify!($float), ">"),
                        concat!("Complex<", stringify!($float), ">"),
                    )
                })
            }
        }

        impl Reflect for Complex<$float> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Complex
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Complex(Complex64::new(self.re as f64, self.im as f64))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Complex(self)
            }

            impl_simple_type_reflect!(debug);
            impl_serde_reflect!();
        }
    )*};
}

impl_reflect_complex!(f32, f64);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use num_complex::{Complex32, Complex64};

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::ReflectRef;

    #[test]
    fn widened_view() {
        let c = Complex32::new(1.5, -2.0);
        let ReflectRef::Complex(v) = c.reflect_ref() else {
            panic!("expected a complex view");
        };
        assert_eq!(v, Complex64::new(1.5, -2.0));
        assert_eq!(Complex32::type_info().short_name(), "num_complex::Complex<f32>");
    }
}
