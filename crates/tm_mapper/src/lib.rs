#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Alloc

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod cache;
mod config;
mod converter;
mod error;
mod mapper;
mod object;
mod path;
mod registry;
mod resolve;

pub mod tag;

// -----------------------------------------------------------------------------
// Top-level exports

pub use accessor::{Accessor, FieldAccessor, MethodAccessor, Value};
pub use config::{DEFAULT_LEAF_TYPES, MapperConfig};
pub use converter::{CompiledConverter, Direction, Step};
pub use error::{MapError, Role};
pub use mapper::{Mapper, MapperStats};
pub use object::{Binding, KeyMap, MapEntry, ParsedObject};
pub use path::FieldPath;
