use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Helpers

fn parse_lit_once(
    meta: &ParseNestedMeta,
    slot: &mut Option<LitStr>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    *slot = Some(meta.value()?.parse::<LitStr>()?);
    Ok(())
}

fn parse_flag_once(meta: &ParseNestedMeta, slot: &mut Option<Span>, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    *slot = Some(meta.path.segments[0].ident.span());
    Ok(())
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[reflect(...)]` on the type.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `type_name = "..."`
    pub type_name: Option<LitStr>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_name") {
                    parse_lit_once(&meta, &mut this.type_name, "type_name")
                } else if meta.path.is_ident("auto_register") {
                    parse_flag_once(&meta, &mut this.auto_register, "auto_register")
                } else {
                    Err(meta.error("unsupported type attribute, expected `type_name` or `auto_register`"))
                }
            })?;
        }

        this.validity()?;
        Ok(this)
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(lit) = &self.type_name {
            let value = lit.value();
            if value.is_empty() || value.contains(['\n', '\r']) {
                return Err(syn::Error::new(
                    lit.span(),
                    "record type name must not be empty or contain a line break",
                ));
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[reflect(...)]` on a field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `name = "..."`
    pub name: Option<LitStr>,
    /// `transient`
    pub transient: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    parse_lit_once(&meta, &mut this.name, "name")
                } else if meta.path.is_ident("transient") {
                    parse_flag_once(&meta, &mut this.transient, "transient")
                } else {
                    Err(meta.error("unsupported field attribute, expected `name` or `transient`"))
                }
            })?;
        }

        this.validity()?;
        Ok(this)
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(lit) = &self.name {
            let value = lit.value();
            if value.is_empty() || value.starts_with('@') || value.contains(['=', '\n', '\r']) {
                return Err(syn::Error::new(
                    lit.span(),
                    "member name must not be empty, start with `@`, or contain `=` or a line break",
                ));
            }
        }
        Ok(())
    }
}
