use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectStruct;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> TokenStream {
    // Parse attribute and fields infomation.
    let info = match ReflectStruct::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let typed_impl = crate::impls::impl_trait_typed(&info);
    let get_type_meta_impl = crate::impls::impl_trait_get_type_meta(&info);
    let auto_register_impl = crate::impls::get_auto_register_impl(&info.meta);

    TokenStream::from(quote! {
        const _: () = {
            #typed_impl

            #get_type_meta_impl

            #auto_register_impl
        };
    })
}
