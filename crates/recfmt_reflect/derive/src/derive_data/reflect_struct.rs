use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// Define

/// A struct with named fields, or a unit struct.
pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta<'a>,
    pub fields: Vec<StructField<'a>>,
}

/// Represents a field on a struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The field identifier, named fields only.
    pub ident: &'a Ident,
    /// The reflection-based attributes on the field.
    pub attrs: FieldAttributes,
    /// Declaration index, used to name the generated accessors.
    pub index: usize,
}

// -----------------------------------------------------------------------------
// Implementation

impl<'a> StructField<'a> {
    /// The member name expression, a string literal.
    pub fn name_tokens(&self) -> TokenStream {
        match &self.attrs.name {
            Some(lit) => lit.to_token_stream(),
            None => LitStr::new(&self.ident.unraw().to_string(), self.ident.span())
                .to_token_stream(),
        }
    }

    #[inline]
    pub fn is_transient(&self) -> bool {
        self.attrs.transient.is_some()
    }
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` can only be derived for structs",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .enumerate()
                .map(|(index, data)| {
                    Ok(StructField {
                        data,
                        // Named fields always carry an identifier.
                        ident: data.ident.as_ref().ok_or_else(|| {
                            syn::Error::new_spanned(data, "expected a named field")
                        })?,
                        attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                        index,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "tuple structs are not supported, record members need names",
                ));
            }
        };

        let meta = ReflectMeta::new(TypeAttributes::parse_attrs(&ast.attrs)?, &ast.ident);

        Ok(Self { meta, fields })
    }
}
