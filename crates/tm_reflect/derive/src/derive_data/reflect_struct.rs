use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Field, Fields, Ident, LitStr};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A named field and its parsed attributes.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// The field name as a string literal.
    #[inline]
    pub fn name(&self) -> LitStr {
        LitStr::new(&self.ident().to_string(), Span::call_site())
    }

    /// `.with_tags(FieldTags::new(&[...]))`, or nothing without tags.
    pub fn with_tags_expression(&self, tm_reflect_path: &syn::Path) -> TokenStream {
        if self.attrs.tags.is_empty() {
            return crate::utils::empty();
        }

        let field_tags_ = crate::path::field_tags_(tm_reflect_path);
        let pairs = self.attrs.tags.iter().map(|(key, value)| quote!((#key, #value)));

        quote! {
            .with_tags({
                const TAGS: &[(&str, &str)] = &[#(#pairs),*];
                #field_tags_::new(TAGS)
            })
        }
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(
        attrs: TypeAttributes,
        ident: &'a Ident,
        generics: &syn::Generics,
        fields: &'a Fields,
    ) -> syn::Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(syn::Error::new_spanned(
                ident,
                "`Reflect` can only be derived for structs with named fields, \
                 mark leaf types with `#[reflect(opaque, clone)]`",
            ));
        };

        let fields = named
            .named
            .iter()
            .map(|data| {
                let Some(ident) = &data.ident else {
                    return Err(syn::Error::new_spanned(data, "expected a named field"));
                };
                Ok(StructField {
                    data,
                    ident,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let bounded_types = fields
            .iter()
            .filter(|f| f.attrs.ignore.is_none())
            .map(|f| &f.data.ty)
            .collect::<Vec<_>>();

        let meta = ReflectMeta::new(attrs, ident, generics, &bounded_types)?;
        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    #[inline]
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|f| f.attrs.ignore.is_none())
    }
}
