#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use tm_mapper as mapper;
pub use tm_reflect as reflect;
pub use tm_utils as utils;

/// The items needed to declare records and map between them.
pub mod prelude {
    pub use tm_mapper::{MapError, Mapper, MapperConfig};
    pub use tm_reflect::derive::Reflect;
    pub use tm_reflect::info::Typed;
    pub use tm_reflect::{FromReflect, Reflect};
}
