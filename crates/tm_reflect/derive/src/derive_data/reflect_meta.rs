use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, ImplGenerics, Path, Type, TypeGenerics, WhereClause};

use super::TypeAttributes;
use crate::path::fp::{SendFP, SyncFP};

/// Shared data of one derive invocation.
pub(crate) struct ReflectMeta<'a> {
    tm_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    // Input generics plus the bounds generated code relies on.
    generics: Generics,
    is_generic: bool,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("tm_reflect_path", &self.tm_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    /// `bounded_types` must implement `Reflect + Typed + FromReflect` for the
    /// generated code to compile; for generic types they become where clauses.
    pub fn new(
        attrs: TypeAttributes,
        ident: &'a Ident,
        generics: &Generics,
        bounded_types: &[&Type],
    ) -> syn::Result<Self> {
        if let Some(lifetime) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let tm_reflect_path = crate::path::tm_reflect();
        let is_generic = generics.type_params().next().is_some();

        let mut generics = generics.clone();
        if is_generic {
            for param in generics.params.iter_mut() {
                if let GenericParam::Type(param) = param {
                    param.bounds.push(syn::parse_quote!(#SendFP));
                    param.bounds.push(syn::parse_quote!(#SyncFP));
                    param.bounds.push(syn::parse_quote!('static));
                }
            }

            let reflect_ = crate::path::reflect_(&tm_reflect_path);
            let typed_ = crate::path::typed_(&tm_reflect_path);
            let from_reflect_ = crate::path::from_reflect_(&tm_reflect_path);
            let where_clause = generics.make_where_clause();
            for ty in bounded_types {
                where_clause
                    .predicates
                    .push(syn::parse_quote!(#ty: #reflect_ + #typed_ + #from_reflect_));
            }
        }

        Ok(Self {
            tm_reflect_path,
            attrs,
            ident,
            generics,
            is_generic,
        })
    }

    #[inline]
    pub fn tm_reflect_path(&self) -> &Path {
        &self.tm_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Whether the type has type parameters (and so shares generic cells).
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.is_generic
    }

    #[inline]
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, Option<&WhereClause>) {
        self.generics.split_for_impl()
    }

    /// The type name as a string literal, without generics.
    #[inline]
    pub fn ident_str(&self) -> syn::LitStr {
        syn::LitStr::new(&self.ident.to_string(), Span::call_site())
    }

    /// `TypePath` for the type.
    ///
    /// Non-generic types use `module_path!()`; generic types use
    /// `core::any::type_name` so that every instantiation is distinct.
    pub fn type_path_tokens(&self) -> TokenStream {
        let type_path_ = crate::path::type_path_(&self.tm_reflect_path);
        let ident = self.ident;
        let ident_str = self.ident_str();
        let (impl_generics, ty_generics, where_clause) = self.split_generics();

        let (path, name) = if self.is_generic {
            (
                quote!(::core::any::type_name::<Self>()),
                quote!(::core::any::type_name::<Self>()),
            )
        } else {
            (
                quote!(::core::concat!(::core::module_path!(), "::", #ident_str)),
                quote!(#ident_str),
            )
        };

        quote! {
            impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
                #[inline]
                fn type_path() -> &'static str {
                    #path
                }

                #[inline]
                fn type_name() -> &'static str {
                    #name
                }
            }
        }
    }
}
