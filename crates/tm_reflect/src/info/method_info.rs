use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::ops::MethodError;

/// Type-erased read method: receives the record, returns a fresh value.
pub type GetterFn = fn(&dyn Reflect) -> Result<Box<dyn Reflect>, MethodError>;

/// Type-erased write method: receives the record and a single argument.
pub type SetterFn = fn(&mut dyn Reflect, &dyn Reflect) -> Result<(), MethodError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Getter,
    Setter,
}

/// The callable behind a [`MethodInfo`].
#[derive(Clone, Copy)]
pub enum MethodFn {
    Getter(GetterFn),
    Setter(SetterFn),
}

/// A named method of a record type, callable through reflection.
///
/// The derive registers these from `#[reflect(getter(..), setter(..))]`.
/// A getter takes `&self` and returns a reflected value, a setter takes
/// `&mut self` and one argument; its return value is discarded.
///
/// ```
/// use tm_reflect::{Reflect, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(getter(total), setter(set_total))]
/// struct Order { cents: u64 }
///
/// impl Order {
///     fn total(&self) -> u64 { self.cents }
///     fn set_total(&mut self, cents: u64) { self.cents = cents; }
/// }
///
/// let info = Order::type_info().as_struct().unwrap();
/// let mut order = Order { cents: 5 };
///
/// let value = info.method("total").unwrap().call_get(&order).unwrap();
/// assert_eq!(value.downcast_ref::<u64>(), Some(&5));
///
/// info.method("set_total").unwrap().call_set(&mut order, &9_u64).unwrap();
/// assert_eq!(order.cents, 9);
///
/// assert!(info.method("total").unwrap().call_set(&mut order, &1_u64).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct MethodInfo {
    name: &'static str,
    func: MethodFn,
}

impl MethodInfo {
    #[inline]
    pub const fn getter(name: &'static str, func: GetterFn) -> Self {
        Self {
            name,
            func: MethodFn::Getter(func),
        }
    }

    #[inline]
    pub const fn setter(name: &'static str, func: SetterFn) -> Self {
        Self {
            name,
            func: MethodFn::Setter(func),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn func(&self) -> MethodFn {
        self.func
    }

    #[inline]
    pub const fn kind(&self) -> MethodKind {
        match self.func {
            MethodFn::Getter(_) => MethodKind::Getter,
            MethodFn::Setter(_) => MethodKind::Setter,
        }
    }

    /// Invoke as a getter on `this`.
    pub fn call_get(&self, this: &dyn Reflect) -> Result<Box<dyn Reflect>, MethodError> {
        match self.func {
            MethodFn::Getter(f) => f(this),
            MethodFn::Setter(_) => Err(MethodError::NotAGetter { method: self.name }),
        }
    }

    /// Invoke as a setter on `this` with `value`.
    pub fn call_set(&self, this: &mut dyn Reflect, value: &dyn Reflect) -> Result<(), MethodError> {
        match self.func {
            MethodFn::Setter(f) => f(this, value),
            MethodFn::Getter(_) => Err(MethodError::NotASetter { method: self.name }),
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl fmt::Debug for MethodFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Getter(_) => f.pad("Getter"),
            Self::Setter(_) => f.pad("Setter"),
        }
    }
}
