use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{get_auto_register_impl, get_methods_expression};
use super::{impl_struct_from_reflect, impl_trait_typed};

use crate::derive_data::ReflectStruct;
use crate::path::fp::{CloneFP, DebugFP, OptionFP, PartialEqFP, ResultFP};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = meta.type_path_tokens();

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, get_struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    // trait: FromReflect
    let from_reflect_tokens = impl_struct_from_reflect(info);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #from_reflect_tokens

        #auto_register_tokens
    }
}

/// `TypeInfo::Struct(StructInfo::new::<Self>(&[ .. ]).with_methods(&[ .. ]))`
fn get_struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let tm_reflect_path = meta.tm_reflect_path();
    let type_info_ = crate::path::type_info_(tm_reflect_path);
    let struct_info_ = crate::path::struct_info_(tm_reflect_path);
    let named_field_ = crate::path::named_field_(tm_reflect_path);

    let fields = info.active_fields().map(|field| {
        let name = field.name();
        let ty = &field.data.ty;
        let with_tags = field.with_tags_expression(tm_reflect_path);
        quote! {
            #named_field_::new::<#ty>(#name) #with_tags
        }
    });

    let with_methods = get_methods_expression(meta);

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#fields),* ])
            #with_methods
        )
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let tm_reflect_path = meta.tm_reflect_path();
    let struct_ = crate::path::struct_(tm_reflect_path);
    let reflect_ = crate::path::reflect_(tm_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(tm_reflect_path);

    let members = info.active_fields().map(|f| f.ident()).collect::<Vec<_>>();
    let names = info.active_fields().map(|f| f.name()).collect::<Vec<_>>();
    let indices = (0..members.len()).collect::<Vec<usize>>();
    let field_len = members.len();
    let option_ = OptionFP.to_token_stream();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(&self.#members as &dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(&mut self.#members as &mut dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(&self.#members as &dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(&mut self.#members as &mut dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#indices => #option_::Some(#names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect` trait implementation tokens.
fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let flags = &meta.attrs().avail_traits;

    let tm_reflect_path = meta.tm_reflect_path();
    let reflect_ = crate::path::reflect_(tm_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(tm_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(tm_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(tm_reflect_path);
    let apply_error_ = crate::path::apply_error_(tm_reflect_path);
    let impls_ = crate::path::impls_(tm_reflect_path);

    // Same type: a plain clone is cheaper than the field walk.
    let try_apply_fast_path = if flags.clone.is_some() {
        quote! {
            if let #OptionFP::Some(__value) = __value.downcast_ref::<Self>() {
                #CloneFP::clone_from(self, __value);
                return #ResultFP::Ok(());
            }
        }
    } else {
        crate::utils::empty()
    };

    let partial_eq_tokens = if flags.partial_eq.is_some() {
        quote! {
            #OptionFP::Some(
                __value
                    .downcast_ref::<Self>()
                    .is_some_and(|__value| #PartialEqFP::eq(self, __value))
            )
        }
    } else {
        quote! {
            #impls_::struct_partial_eq(self, __value)
        }
    };

    let debug_tokens = if flags.debug.is_some() {
        quote! {
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #DebugFP::fmt(self, f)
            }
        }
    } else {
        crate::utils::empty()
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn try_apply(&mut self, __value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                #try_apply_fast_path
                #impls_::struct_try_apply(self, __value)
            }

            fn reflect_partial_eq(&self, __value: &dyn #reflect_) -> #OptionFP<bool> {
                #partial_eq_tokens
            }

            #debug_tokens
        }
    }
}
