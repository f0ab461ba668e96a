use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TraitAvailableFlags

/// A struct used to record whether the specified trait is available.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub clone: Option<Span>,
    pub debug: Option<Span>,
    pub partial_eq: Option<Span>,
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level `#[reflect(...)]` content.
///
/// ```ignore
/// #[reflect(opaque, clone, debug, partial_eq, auto_register)]
/// #[reflect(getter(name, age), setter(set_name))]
/// ```
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub opaque: Option<Span>,
    pub auto_register: Option<Span>,
    pub avail_traits: TraitAvailableFlags,
    pub getters: Vec<Ident>,
    pub setters: Vec<Ident>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("opaque") {
                    this.opaque = Some(span);
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(span);
                } else if meta.path.is_ident("clone") {
                    this.avail_traits.clone = Some(span);
                } else if meta.path.is_ident("debug") {
                    this.avail_traits.debug = Some(span);
                } else if meta.path.is_ident("partial_eq") {
                    this.avail_traits.partial_eq = Some(span);
                } else if meta.path.is_ident("getter") {
                    meta.parse_nested_meta(|inner| {
                        this.getters.push(inner.path.require_ident()?.clone());
                        Ok(())
                    })?;
                } else if meta.path.is_ident("setter") {
                    meta.parse_nested_meta(|inner| {
                        this.setters.push(inner.path.require_ident()?.clone());
                        Ok(())
                    })?;
                } else if meta.path.is_ident("tag") || meta.path.is_ident("ignore") {
                    return Err(meta.error("this attribute can only be used on fields"));
                } else {
                    return Err(meta.error("unknown type attribute"));
                }
                Ok(())
            })?;
        }

        this.check_methods()?;
        Ok(this)
    }

    fn check_methods(&self) -> syn::Result<()> {
        let all = self.getters.iter().chain(self.setters.iter());
        for (index, ident) in all.clone().enumerate() {
            if all.clone().take(index).any(|prev| prev == ident) {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("method `{ident}` is registered twice"),
                ));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn has_methods(&self) -> bool {
        !self.getters.is_empty() || !self.setters.is_empty()
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level `#[reflect(...)]` content.
///
/// ```ignore
/// #[reflect(tag(map = "user_id", map_to = "-"))]
/// #[reflect(ignore)]
/// ```
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub ignore: Option<Span>,
    /// `(key, value)` in declaration order.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = Some(meta.path.span());
                } else if meta.path.is_ident("tag") {
                    meta.parse_nested_meta(|tag| {
                        let key = tag.path.require_ident()?.to_string();
                        if this.tags.iter().any(|(k, _)| *k == key) {
                            return Err(tag.error(format!("duplicate tag `{key}`")));
                        }
                        let value: LitStr = tag.value()?.parse()?;
                        this.tags.push((key, value));
                        Ok(())
                    })?;
                } else {
                    return Err(meta.error("unknown field attribute"));
                }
                Ok(())
            })?;
        }

        if let Some(span) = this.ignore
            && !this.tags.is_empty()
        {
            return Err(syn::Error::new(span, "an ignored field cannot carry tags"));
        }
        Ok(this)
    }
}
