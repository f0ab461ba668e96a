use core::{error, fmt};

/// Failure of a reflected method call, see [`MethodInfo`](crate::info::MethodInfo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodError {
    /// The receiver is not the type the method belongs to.
    ReceiverMismatch {
        method: &'static str,
        expected: &'static str,
        received: &'static str,
    },
    /// A setter was called as a getter.
    NotAGetter { method: &'static str },
    /// A getter was called as a setter.
    NotASetter { method: &'static str },
    /// The setter argument cannot be converted to the parameter type.
    ArgumentMismatch {
        method: &'static str,
        expected: &'static str,
        received: &'static str,
    },
}

impl MethodError {
    /// The name of the method that failed.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::ReceiverMismatch { method, .. }
            | Self::NotAGetter { method }
            | Self::NotASetter { method }
            | Self::ArgumentMismatch { method, .. } => method,
        }
    }
}

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReceiverMismatch {
                method,
                expected,
                received,
            } => write!(
                f,
                "method `{method}` expects a `{expected}` receiver, received `{received}`"
            ),
            Self::NotAGetter { method } => write!(f, "method `{method}` is not a getter"),
            Self::NotASetter { method } => write!(f, "method `{method}` is not a setter"),
            Self::ArgumentMismatch {
                method,
                expected,
                received,
            } => write!(
                f,
                "method `{method}` expects a `{expected}` argument, received `{received}`"
            ),
        }
    }
}

impl error::Error for MethodError {}
