//! Fully qualified paths of `core` items used by generated code.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => { $($path:tt)+ })+) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )+
    };
}

define_fp! {
    OptionFP => { ::core::option::Option }
    ResultFP => { ::core::result::Result }
    CloneFP => { ::core::clone::Clone }
    DefaultFP => { ::core::default::Default }
    DebugFP => { ::core::fmt::Debug }
    PartialEqFP => { ::core::cmp::PartialEq }
    SendFP => { ::core::marker::Send }
    SyncFP => { ::core::marker::Sync }
}
