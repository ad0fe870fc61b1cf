//! This independent module is used to provide the required path.
//! So as to minimize changes when the `recfmt_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `recfmt_reflect` crate.
///
/// 1. For crates that depend on `recfmt_reflect`, `::recfmt_reflect` is returned.
/// 2. For crates that depend on `recfmt`, `::recfmt::reflect` is returned.
/// 3. For other situations, `::recfmt_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, the path is obtained once
/// per expansion and passed around.
pub(crate) fn recfmt_reflect() -> syn::Path {
    recfmt_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("recfmt_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn reflect_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn box_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::__macro_exports::Box
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::__macro_exports::auto_register
    }
}

#[inline]
pub(crate) fn typed_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn record_info_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::info::RecordInfo
    }
}

#[inline]
pub(crate) fn record_info_cell_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::info::RecordInfoCell
    }
}

#[inline]
pub(crate) fn field_info_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::info::FieldInfo
    }
}

#[inline]
pub(crate) fn type_meta_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::registry::TypeMeta
    }
}

#[inline]
pub(crate) fn get_type_meta_(recfmt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #recfmt_reflect_path::registry::GetTypeMeta
    }
}
