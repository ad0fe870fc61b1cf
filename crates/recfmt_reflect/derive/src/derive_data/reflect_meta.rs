use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Path};

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    recfmt_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident) -> Self {
        Self {
            attrs,
            ident,
            recfmt_reflect_path: crate::path::recfmt_reflect(),
        }
    }

    #[inline]
    pub fn recfmt_reflect_path(&self) -> &Path {
        &self.recfmt_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The record type name expression, a `&'static str` constant.
    ///
    /// Either the `type_name` literal or
    ///
    /// ```ignore
    /// ::core::concat!(::core::module_path!(), "::", "Ident")
    /// ```
    pub fn type_name_tokens(&self) -> TokenStream {
        match &self.attrs().type_name {
            Some(lit) => lit.to_token_stream(),
            None => {
                let ident = self.ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }
}
