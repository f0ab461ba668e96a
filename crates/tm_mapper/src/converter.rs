use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use tm_reflect::Reflect;
use tm_reflect::info::Type;

use crate::{Accessor, Binding, MapError, ParsedObject, Role};

// -----------------------------------------------------------------------------
// Step

/// Which side's table produced a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the destination's `map_from` table.
    Pull,
    /// From the source's `map_to` table.
    Push,
}

/// One field-level copy: read from the source, write to the destination.
#[derive(Debug, Clone)]
pub struct Step {
    key: String,
    direction: Direction,
    read: Accessor,
    write: Accessor,
}

impl Step {
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The accessor applied to the source record.
    #[inline]
    pub const fn read(&self) -> &Accessor {
        &self.read
    }

    /// The accessor applied to the destination record.
    #[inline]
    pub const fn write(&self) -> &Accessor {
        &self.write
    }

    pub fn run(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), MapError> {
        let value = self.read.read(from)?;
        log::trace!(
            "{:?} `{}`: `{}` -> `{}`",
            self.direction,
            self.key,
            self.read.name(),
            self.write.name(),
        );
        self.write.write(to, value.as_reflect())
    }
}

// -----------------------------------------------------------------------------
// CompiledConverter

/// The ordered copy steps from one record type to another.
///
/// Pull steps come first, in the destination's `map_from` order, then push
/// steps in the source's `map_to` order. A push whose key was already pulled
/// is dropped.
#[derive(Debug)]
pub struct CompiledConverter {
    source: Type,
    destination: Type,
    steps: Box<[Step]>,
}

impl CompiledConverter {
    /// Joins the tables of two parsed records.
    ///
    /// Fails with [`MapError::AccessorNotFound`] on the first key that has no
    /// field or method on the other side.
    pub fn compile(from: &ParsedObject, to: &ParsedObject) -> Result<Self, MapError> {
        let mut steps = Vec::with_capacity(to.map_from().len() + from.map_to().len());

        for (key, entry) in to.map_from().iter() {
            let read = match entry.binding() {
                Binding::Key { method } => from
                    .getter(key)
                    .cloned()
                    .map(Accessor::Field)
                    .or_else(|| from.method(method).map(Accessor::Method)),
                Binding::Method { name } => from.method(name).map(Accessor::Method),
            }
            .ok_or_else(|| not_found(key, Role::Source, from, to))?;

            steps.push(Step {
                key: key.into(),
                direction: Direction::Pull,
                read,
                write: Accessor::Field(entry.field().clone()),
            });
        }

        for (key, entry) in from.map_to().iter() {
            if to.map_from().contains_key(key) {
                continue;
            }

            let write = match entry.binding() {
                Binding::Key { method } => to
                    .setter(key)
                    .cloned()
                    .map(Accessor::Field)
                    .or_else(|| to.method(method).map(Accessor::Method)),
                Binding::Method { name } => to.method(name).map(Accessor::Method),
            }
            .ok_or_else(|| not_found(key, Role::Destination, from, to))?;

            steps.push(Step {
                key: key.into(),
                direction: Direction::Push,
                read: Accessor::Field(entry.field().clone()),
                write,
            });
        }

        Ok(Self {
            source: *from.type_info().ty(),
            destination: *to.type_info().ty(),
            steps: steps.into_boxed_slice(),
        })
    }

    #[inline]
    pub const fn source(&self) -> &Type {
        &self.source
    }

    #[inline]
    pub const fn destination(&self) -> &Type {
        &self.destination
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step in order and stops at the first error.
    ///
    /// Writes made by earlier steps are kept when a later one fails. The
    /// records must be of the compiled types; [`Mapper::map`] guarantees it.
    ///
    /// [`Mapper::map`]: crate::Mapper::map
    pub fn run(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), MapError> {
        self.steps.iter().try_for_each(|step| step.run(from, to))
    }
}

fn not_found(key: &str, role: Role, from: &ParsedObject, to: &ParsedObject) -> MapError {
    MapError::AccessorNotFound {
        key: key.into(),
        role,
        source_type: from.type_path(),
        destination_type: to.type_path(),
    }
}
