use crate::Reflect;

/// A trait that enables types to be constructed from reflected data.
///
/// # Rules
///
/// 1. If the `TypeId` matches and the type is cloneable, return a clone.
/// 2. Opaque types return `None` for any other type.
/// 3. Records build themselves field by field from any record that has every
///    field they need, each converted through `from_reflect` in turn.
///
/// The derive macro implements this trait for records; write methods
/// registered with `#[reflect(setter(...))]` receive their argument through
/// it.
///
/// # Examples
///
/// ```
/// use tm_reflect::{FromReflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// #[derive(Reflect)]
/// struct Other { x: i32, y: i32 }
///
/// let p = Point::from_reflect(&Other { x: 1, y: 2 }).unwrap();
/// assert_eq!((p.x, p.y), (1, 2));
///
/// assert!(i32::from_reflect(&1_i64).is_none());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Constructs a concrete instance of `Self` from a reflected value.
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self>;
}
