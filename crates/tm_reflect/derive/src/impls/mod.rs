// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod methods;
mod opaque_kind;
mod struct_from_reflect;
mod struct_kind;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use methods::get_methods_expression;
pub(crate) use struct_from_reflect::impl_struct_from_reflect;
pub(crate) use trait_typed::impl_trait_typed;

use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// Dispatch on the shape of the input type.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    let result = TypeAttributes::parse_attrs(&ast.attrs).and_then(|attrs| {
        if attrs.opaque.is_some() {
            let meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics, &[])?;
            return opaque_kind::impl_opaque(&meta);
        }

        match &ast.data {
            Data::Struct(data) => {
                let info = ReflectStruct::new(attrs, &ast.ident, &ast.generics, &data.fields)?;
                Ok(struct_kind::impl_struct(&info))
            }
            Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
                &ast.ident,
                "`Reflect` can only be derived for structs with named fields, \
                 mark leaf types with `#[reflect(opaque, clone)]`",
            )),
        }
    });

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
