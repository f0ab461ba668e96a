//! Items referenced by generated code. Not a public API.

use alloc::boxed::Box;

use crate::info::TypePath;
use crate::ops::MethodError;
use crate::{FromReflect, Reflect};

/// Re-exports of `alloc` and `core` items so that generated code works in
/// `no_std` crates without `extern crate alloc`.
pub mod macro_utils {
    pub use alloc::boxed::Box;
    pub use core::clone::Clone;
    pub use core::default::Default;
    pub use core::option::Option::{self, None, Some};
    pub use core::result::Result::{self, Err, Ok};

    pub use super::{call_getter, call_setter};
}

/// Body of a generated getter: downcast the receiver and box the result.
pub fn call_getter<T, R>(
    this: &dyn Reflect,
    method: &'static str,
    f: fn(&T) -> R,
) -> Result<Box<dyn Reflect>, MethodError>
where
    T: Reflect + TypePath,
    R: Reflect,
{
    match this.downcast_ref::<T>() {
        Some(receiver) => Ok(Box::new(f(receiver))),
        None => Err(MethodError::ReceiverMismatch {
            method,
            expected: T::type_path(),
            received: this.reflect_type_path(),
        }),
    }
}

/// Body of a generated setter: downcast the receiver, convert the argument
/// through [`FromReflect`] and discard the return value.
pub fn call_setter<T, A, O>(
    this: &mut dyn Reflect,
    value: &dyn Reflect,
    method: &'static str,
    f: fn(&mut T, A) -> O,
) -> Result<(), MethodError>
where
    T: Reflect + TypePath,
    A: FromReflect + TypePath,
{
    let received = this.reflect_type_path();
    let Some(receiver) = this.downcast_mut::<T>() else {
        return Err(MethodError::ReceiverMismatch {
            method,
            expected: T::type_path(),
            received,
        });
    };

    let Some(argument) = A::from_reflect(value) else {
        return Err(MethodError::ArgumentMismatch {
            method,
            expected: A::type_path(),
            received: value.reflect_type_path(),
        });
    };

    f(receiver, argument);
    Ok(())
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::TypeInfo;

    pub use inventory;

    /// A `Typed::type_info` function submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn() -> &'static TypeInfo);

    inventory::collect!(__AutoRegisterFunc);

    /// Every type submitted in the final binary, in unspecified order.
    pub fn registered_types() -> impl Iterator<Item = &'static TypeInfo> {
        inventory::iter::<__AutoRegisterFunc>
            .into_iter()
            .map(|func| (func.0)())
    }
}
