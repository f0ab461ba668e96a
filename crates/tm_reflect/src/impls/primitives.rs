use alloc::string::String;
use core::time::Duration;

crate::impl_reflect_opaque!(bool, char);
crate::impl_reflect_opaque!(u8, u16, u32, u64, u128, usize);
crate::impl_reflect_opaque!(i8, i16, i32, i64, i128, isize);
crate::impl_reflect_opaque!(f32, f64);
crate::impl_reflect_opaque!(String, &'static str);
crate::impl_reflect_opaque!(Duration);
