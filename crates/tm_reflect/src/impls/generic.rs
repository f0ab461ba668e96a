use alloc::vec::Vec;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::impls::opaque_try_apply;
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};
use crate::{FromReflect, Reflect};

// Containers are leaves: they are read and assigned whole, never entered.

macro_rules! impl_generic_opaque {
    ($name:literal, $ty:ident<$param:ident>) => {
        impl<$param: Reflect + TypePath + Clone> TypePath for $ty<$param> {
            #[inline]
            fn type_path() -> &'static str {
                core::any::type_name::<Self>()
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$name, "<", $param::type_name(), ">"]))
            }
        }

        impl<$param: Reflect + TypePath + Clone> Typed for $ty<$param> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<$param: Reflect + TypePath + Clone> FromReflect for $ty<$param> {
            #[inline]
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                reflect.downcast_ref::<Self>().cloned()
            }
        }
    };
}

impl_generic_opaque!("Option", Option<T>);
impl_generic_opaque!("Vec", Vec<T>);

impl<T: Reflect + TypePath + Clone> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Opaque
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Opaque(self)
    }

    #[inline]
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        opaque_try_apply(self, value)
    }

    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        let Some(other) = value.downcast_ref::<Self>() else {
            return Some(false);
        };
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.reflect_partial_eq(rhs),
            (None, None) => Some(true),
            _ => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + TypePath + Clone> Reflect for Vec<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Opaque
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Opaque(self)
    }

    #[inline]
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        opaque_try_apply(self, value)
    }

    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        let Some(other) = value.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (lhs, rhs) in self.iter().zip(other) {
            if !lhs.reflect_partial_eq(rhs)? {
                return Some(false);
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::{FromReflect, Reflect};

    #[test]
    fn names() {
        assert_eq!(<Option<String>>::type_name(), "Option<String>");
        assert_eq!(<Vec<u8>>::type_name(), "Vec<u8>");
        assert_eq!(<Vec<Option<i32>>>::type_name(), "Vec<Option<i32>>");
        assert!(<Vec<u8>>::type_info().type_is::<Vec<u8>>());
        assert!(<Vec<u16>>::type_info().type_is::<Vec<u16>>());
    }

    #[test]
    fn whole_value_semantics() {
        let mut a: Option<i32> = None;
        assert_eq!(a.reflect_kind(), ReflectKind::Opaque);
        a.try_apply(&Some(4_i32)).unwrap();
        assert_eq!(a, Some(4));
        assert!(a.try_apply(&Some(4_i64)).is_err());

        let mut v = vec![1_u8];
        v.try_apply(&vec![2_u8, 3]).unwrap();
        assert_eq!(v, [2, 3]);
        assert_eq!(<Vec<u8>>::from_reflect(&v), Some(vec![2, 3]));
    }

    #[test]
    fn eq_and_debug() {
        let v: Vec<String> = vec!["a".into()];
        assert_eq!(v.reflect_partial_eq(&v.clone()), Some(true));
        assert_eq!(v.reflect_partial_eq(&Vec::<String>::new()), Some(false));
        assert_eq!(format!("{:?}", v.as_reflect()), "[\"a\"]");
        assert_eq!(format!("{:?}", Some(1_u8).as_reflect()), "Some(1)");
    }
}
