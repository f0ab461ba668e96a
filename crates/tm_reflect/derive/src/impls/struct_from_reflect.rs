use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::{CloneFP, DefaultFP, OptionFP};

/// Generate `FromReflect::from_reflect` tokens for struct.
///
/// Every active field is looked up by name in the input record and converted
/// with its own `FromReflect`; ignored fields are `Default::default()`.
pub(crate) fn impl_struct_from_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let tm_reflect_path = meta.tm_reflect_path();
    let reflect_ = crate::path::reflect_(tm_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(tm_reflect_path);
    let struct_ = crate::path::struct_(tm_reflect_path);

    let clone_tokens = if meta.attrs().avail_traits.clone.is_some() {
        quote! {
            if let #OptionFP::Some(__value) = __input.downcast_ref::<Self>() {
                return #OptionFP::Some(#CloneFP::clone(__value));
            }
        }
    } else {
        crate::utils::empty()
    };

    let field_values = info.fields().iter().map(|field| {
        let member = field.ident();
        let ty = &field.data.ty;
        if field.attrs.ignore.is_some() {
            quote! {
                #member: #DefaultFP::default()
            }
        } else {
            let name = field.name();
            quote! {
                #member: <#ty as #from_reflect_>::from_reflect(
                    #struct_::field(__input, #name)?
                )?
            }
        }
    });

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #from_reflect_ for #ident #ty_generics #where_clause {
            fn from_reflect(__input: &dyn #reflect_) -> #OptionFP<Self> {
                #clone_tokens

                let __input = __input.reflect_ref().as_struct().ok()?;
                #OptionFP::Some(Self {
                    #(#field_values,)*
                })
            }
        }
    }
}
