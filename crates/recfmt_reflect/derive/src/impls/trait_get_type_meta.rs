use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// The blank constructor fills every field with `Default::default()`, so the
/// struct itself does not need to implement `Default`.
pub(crate) fn impl_trait_get_type_meta(info: &ReflectStruct) -> TokenStream {
    let meta = &info.meta;
    let recfmt_reflect_path = meta.recfmt_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(recfmt_reflect_path);
    let type_meta_ = crate::path::type_meta_(recfmt_reflect_path);
    let typed_ = crate::path::typed_(recfmt_reflect_path);
    let reflect_ = crate::path::reflect_(recfmt_reflect_path);
    let box_ = crate::path::box_(recfmt_reflect_path);

    let ident = meta.ident();
    let members = info.fields.iter().map(|field| {
        let member = field.ident;
        quote! {
            #member: ::core::default::Default::default()
        }
    });

    quote! {
        impl #get_type_meta_ for #ident {
            fn get_type_meta() -> #type_meta_ {
                fn __blank() -> #box_<dyn #reflect_> {
                    #box_::new(#ident { #(#members),* })
                }

                #type_meta_::new(<Self as #typed_>::record_info(), __blank)
            }
        }
    }
}
