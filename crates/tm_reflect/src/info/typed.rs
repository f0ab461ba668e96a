use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use tm_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A { id: u64 }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.as_struct().unwrap().field("id").is_some());
/// ```
///
/// # Manually Impl
///
/// Not recommended. [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`]
/// cache the leaked value when it is necessary:
///
/// ```
/// use tm_reflect::{
///     info::{Typed, TypeInfo, OpaqueInfo, TypePath},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the type information of the underlying value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tm_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct A { value: u64 }
    ///
    /// let a = Box::new(A { value: 1 }) as Box<dyn Reflect>;
    /// assert!(a.reflect_type_info().type_is::<A>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
