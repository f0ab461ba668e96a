use alloc::boxed::Box;
use core::ops::Deref;

use tm_reflect::Reflect;
use tm_reflect::info::{MethodInfo, MethodKind};

use crate::{FieldPath, MapError};

// -----------------------------------------------------------------------------
// Value

/// A value read through an [`Accessor`].
///
/// Fields are read in place, methods return a fresh value.
pub enum Value<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl Value<'_> {
    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => &**value,
        }
    }

    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl Deref for Value<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_reflect()
    }
}

// -----------------------------------------------------------------------------
// FieldAccessor

/// Reads and writes the field at a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    path: FieldPath,
}

impl FieldAccessor {
    #[inline]
    pub const fn new(path: FieldPath) -> Self {
        Self { path }
    }

    #[inline]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Walks the path and returns the leaf field.
    ///
    /// Fails with [`MapError::FieldPath`] if `record` does not have the shape
    /// the path was resolved from.
    pub fn read<'a>(&self, record: &'a dyn Reflect) -> Result<&'a dyn Reflect, MapError> {
        let mut current = record;
        for &index in self.path.indices() {
            current = current
                .reflect_ref()
                .as_struct()
                .ok()
                .and_then(|data| data.field_at(index))
                .ok_or_else(|| self.mismatch(record.reflect_type_path()))?;
        }
        Ok(current)
    }

    /// Walks the path and assigns `value` to the leaf field.
    ///
    /// The value must be assignable under [`Reflect::try_apply`], otherwise
    /// [`MapError::ValueNotAssignable`] names the dotted field.
    pub fn write(&self, record: &mut dyn Reflect, value: &dyn Reflect) -> Result<(), MapError> {
        let type_path = record.reflect_type_path();
        let Some(field) = self.walk_mut(record) else {
            return Err(self.mismatch(type_path));
        };

        let field_type = field.reflect_type_path();
        field
            .try_apply(value)
            .map_err(|source| MapError::ValueNotAssignable {
                field: self.path.name().into(),
                value_type: value.reflect_type_path(),
                field_type,
                source,
            })
    }

    fn walk_mut<'a>(&self, record: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        let mut current = record;
        for &index in self.path.indices() {
            current = current.reflect_mut().as_struct().ok()?.field_at_mut(index)?;
        }
        Some(current)
    }

    fn mismatch(&self, type_path: &'static str) -> MapError {
        MapError::FieldPath {
            type_path,
            path: self.path.name().into(),
        }
    }
}

// -----------------------------------------------------------------------------
// MethodAccessor

/// Reads or writes through a registered method of a record.
#[derive(Debug, Clone, Copy)]
pub struct MethodAccessor {
    info: &'static MethodInfo,
    owner: &'static str,
}

impl MethodAccessor {
    /// `owner` is the type path of the record declaring the method.
    #[inline]
    pub const fn new(info: &'static MethodInfo, owner: &'static str) -> Self {
        Self { info, owner }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub const fn kind(&self) -> MethodKind {
        self.info.kind()
    }

    #[inline]
    pub const fn info(&self) -> &'static MethodInfo {
        self.info
    }

    /// Calls the method without arguments and returns its result.
    pub fn read(&self, record: &dyn Reflect) -> Result<Box<dyn Reflect>, MapError> {
        self.info
            .call_get(record)
            .map_err(|err| MapError::from_method(err, self.owner))
    }

    /// Calls the method with `value` as its only argument.
    pub fn write(&self, record: &mut dyn Reflect, value: &dyn Reflect) -> Result<(), MapError> {
        self.info
            .call_set(record, value)
            .map_err(|err| MapError::from_method(err, self.owner))
    }
}

// -----------------------------------------------------------------------------
// Accessor

/// A read or write capability, bound to a field path or a named method.
#[derive(Debug, Clone)]
pub enum Accessor {
    Field(FieldAccessor),
    Method(MethodAccessor),
}

impl Accessor {
    /// The dotted field name or the method name.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.path().name(),
            Self::Method(method) => method.name(),
        }
    }

    #[inline]
    pub const fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }

    pub fn read<'a>(&self, record: &'a dyn Reflect) -> Result<Value<'a>, MapError> {
        match self {
            Self::Field(field) => field.read(record).map(Value::Borrowed),
            Self::Method(method) => method.read(record).map(Value::Owned),
        }
    }

    pub fn write(&self, record: &mut dyn Reflect, value: &dyn Reflect) -> Result<(), MapError> {
        match self {
            Self::Field(field) => field.write(record, value),
            Self::Method(method) => method.write(record, value),
        }
    }
}
