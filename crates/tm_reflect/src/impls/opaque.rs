/// Implement the reflection traits for atomic leaf types.
///
/// The types must be `Clone + Debug + PartialEq + Send + Sync + 'static`.
/// They are never decomposed; a value is only assigned from the identical type.
///
/// `type_path` is [`core::any::type_name`], `type_name` is the type as written
/// in the invocation, so bring the type into scope first.
///
/// ```
/// use tm_reflect::{Reflect, FromReflect, impl_reflect_opaque, info::{ReflectKind, TypePath}};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct Money(i64);
///
/// impl_reflect_opaque!(Money);
///
/// assert_eq!(Money::type_name(), "Money");
/// assert_eq!(Money(1).reflect_kind(), ReflectKind::Opaque);
///
/// let mut m = Money(1);
/// m.try_apply(&Money(5)).unwrap();
/// assert_eq!(m, Money(5));
/// assert!(m.try_apply(&5_i64).is_err());
/// assert_eq!(Money::from_reflect(&Money(2)), Some(Money(2)));
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@one $ty:ty) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            #[inline]
            fn try_apply(
                &mut self,
                value: &dyn $crate::Reflect,
            ) -> ::core::result::Result<(), $crate::ops::ApplyError> {
                $crate::impls::opaque_try_apply(self, value)
            }

            #[inline]
            fn reflect_partial_eq(
                &self,
                value: &dyn $crate::Reflect,
            ) -> ::core::option::Option<bool> {
                $crate::impls::opaque_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::FromReflect for $ty {
            #[inline]
            fn from_reflect(reflect: &dyn $crate::Reflect) -> ::core::option::Option<Self> {
                reflect.downcast_ref::<Self>().cloned()
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $( $crate::impl_reflect_opaque!(@one $ty); )+
    };
}
