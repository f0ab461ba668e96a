use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, TypePath};
use crate::ops::{ApplyError, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Struct

/// The default `try_apply` of a record.
///
/// `value` must be a record with the same field names in the same order, and
/// every field must be assignable, recursively through nested records. The
/// whole tree is checked before anything is written, so on error `this` is
/// left untouched.
///
/// ```
/// use tm_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct A { x: i32, y: String }
///
/// #[derive(Reflect)]
/// struct B { x: i32, y: String }
///
/// #[derive(Reflect)]
/// struct C { y: String, x: i32 }
///
/// let mut a = A { x: 0, y: String::new() };
/// a.try_apply(&B { x: 3, y: "b".into() }).unwrap();
/// assert_eq!((a.x, a.y.as_str()), (3, "b"));
///
/// assert!(a.try_apply(&C { y: String::new(), x: 1 }).is_err());
/// assert_eq!(a.x, 3);
/// ```
pub fn struct_try_apply(this: &mut dyn Struct, value: &dyn Reflect) -> Result<(), ApplyError> {
    let from = value.reflect_ref().as_struct()?;
    check_struct(&*this, from)?;

    for index in 0..this.field_len() {
        if let (Some(target), Some(source)) = (this.field_at_mut(index), from.field_at(index)) {
            target.try_apply(source)?;
        }
    }
    Ok(())
}

fn check_struct(this: &dyn Struct, from: &dyn Struct) -> Result<(), ApplyError> {
    let len = this.field_len();
    let same_fields =
        from.field_len() == len && (0..len).all(|index| this.name_at(index) == from.name_at(index));
    if !same_fields {
        return Err(ApplyError::MismatchedFields {
            from_type: from.reflect_type_path(),
            to_type: this.reflect_type_path(),
        });
    }

    for index in 0..len {
        if let (Some(target), Some(source)) = (this.field_at(index), from.field_at(index)) {
            check_apply(target, source)?;
        }
    }
    Ok(())
}

// Mirrors the rules of `struct_try_apply` and `opaque_try_apply` without writing.
fn check_apply(target: &dyn Reflect, value: &dyn Reflect) -> Result<(), ApplyError> {
    match target.reflect_ref() {
        ReflectRef::Struct(target) => check_struct(target, value.reflect_ref().as_struct()?),
        ReflectRef::Opaque(_) => {
            let from_kind = value.reflect_kind();
            if from_kind != ReflectKind::Opaque {
                return Err(ApplyError::MismatchedKinds {
                    from_kind,
                    to_kind: ReflectKind::Opaque,
                });
            }
            if value.ty_id() != target.ty_id() {
                return Err(ApplyError::MismatchedTypes {
                    from_type: value.reflect_type_path(),
                    to_type: target.reflect_type_path(),
                });
            }
            Ok(())
        }
    }
}

/// The default `reflect_partial_eq` of a record.
///
/// Returns `None` if any field pair cannot be compared.
pub fn struct_partial_eq(this: &dyn Struct, value: &dyn Reflect) -> Option<bool> {
    let Ok(other) = value.reflect_ref().as_struct() else {
        return Some(false);
    };
    if this.field_len() != other.field_len() {
        return Some(false);
    }

    for ((name, lhs), (other_name, rhs)) in this.iter_fields().zip(other.iter_fields()) {
        if name != other_name || !lhs.reflect_partial_eq(rhs)? {
            return Some(false);
        }
    }
    Some(true)
}

/// The default `reflect_debug` of a record.
///
/// ```
/// use tm_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let p: &dyn Reflect = &Point { x: 1, y: 2 };
/// assert_eq!(format!("{p:?}"), "Point { x: 1, y: 2 }");
/// ```
pub fn struct_debug(this: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(this.reflect_type_name());
    for (name, value) in this.iter_fields() {
        debug.field(name, &value);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Opaque

/// The `try_apply` of an opaque value: only the identical type is accepted,
/// and is cloned in.
pub fn opaque_try_apply<T>(this: &mut T, value: &dyn Reflect) -> Result<(), ApplyError>
where
    T: Reflect + TypePath + Clone,
{
    let from_kind = value.reflect_kind();
    if from_kind != ReflectKind::Opaque {
        return Err(ApplyError::MismatchedKinds {
            from_kind,
            to_kind: ReflectKind::Opaque,
        });
    }

    match value.downcast_ref::<T>() {
        Some(value) => {
            this.clone_from(value);
            Ok(())
        }
        None => Err(ApplyError::MismatchedTypes {
            from_type: value.reflect_type_path(),
            to_type: T::type_path(),
        }),
    }
}

/// The `reflect_partial_eq` of an opaque value: other types compare unequal.
#[inline]
pub fn opaque_partial_eq<T>(this: &T, value: &dyn Reflect) -> Option<bool>
where
    T: Reflect + PartialEq,
{
    Some(value.downcast_ref::<T>().is_some_and(|value| this == value))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ApplyError;

    #[derive(Reflect, Clone, Debug, PartialEq)]
    #[reflect(clone, partial_eq)]
    struct Span {
        start: u32,
        end: u32,
    }

    #[derive(Reflect)]
    struct Loose {
        start: u32,
        end: u32,
    }

    #[derive(Reflect)]
    struct Wide {
        start: u32,
        end: u64,
    }

    #[derive(Reflect)]
    struct Outer {
        label: String,
        span: Span,
    }

    #[derive(Reflect)]
    struct WideOuter {
        label: String,
        span: Wide,
    }

    #[derive(Reflect)]
    struct LooseOuter {
        label: String,
        span: Loose,
    }

    #[test]
    fn apply_between_records_with_same_fields() {
        let mut span = Span { start: 0, end: 0 };
        span.try_apply(&Loose { start: 1, end: 2 }).unwrap();
        assert_eq!(span, Span { start: 1, end: 2 });
    }

    #[test]
    fn failed_apply_writes_nothing() {
        let mut span = Span { start: 0, end: 0 };
        let err = span.try_apply(&Wide { start: 4, end: 5 }).unwrap_err();
        assert_eq!(
            err,
            ApplyError::MismatchedTypes {
                from_type: "u64",
                to_type: "u32",
            }
        );
        assert_eq!(span, Span { start: 0, end: 0 });
    }

    #[test]
    fn nested_mismatch_writes_nothing() {
        let mut outer = Outer {
            label: "old".into(),
            span: Span { start: 1, end: 2 },
        };
        let err = outer
            .try_apply(&WideOuter {
                label: "new".into(),
                span: Wide { start: 7, end: 9 },
            })
            .unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));
        assert_eq!(outer.label, "old");
        assert_eq!(outer.span, Span { start: 1, end: 2 });

        outer
            .try_apply(&LooseOuter {
                label: "new".into(),
                span: Loose { start: 7, end: 9 },
            })
            .unwrap();
        assert_eq!(outer.label, "new");
        assert_eq!(outer.span, Span { start: 7, end: 9 });
    }

    #[test]
    fn apply_kind_mismatch() {
        let mut span = Span { start: 0, end: 0 };
        assert_eq!(
            span.try_apply(&1_u32).unwrap_err(),
            ApplyError::MismatchedKinds {
                from_kind: ReflectKind::Opaque,
                to_kind: ReflectKind::Struct,
            }
        );

        let mut n = 0_u32;
        assert!(matches!(
            n.try_apply(&span).unwrap_err(),
            ApplyError::MismatchedKinds { .. }
        ));
    }

    #[test]
    fn partial_eq_and_debug() {
        let a = Outer {
            label: "x".into(),
            span: Span { start: 1, end: 2 },
        };
        let b = Outer {
            label: "x".into(),
            span: Span { start: 1, end: 2 },
        };
        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(
            a.span.reflect_partial_eq(&Loose { start: 1, end: 2 }),
            Some(false)
        );
        assert_eq!(
            format!("{:?}", a.as_reflect()),
            "Outer { label: \"x\", span: Span { start: 1, end: 2 } }"
        );
    }
}
