use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed`.
///
/// Every field gets a pair of accessors, `__get_{index}` and `__set_{index}`,
/// declared inside `record_info` so they can name the struct without `Self`.
///
/// ```ignore
/// fn __get_0(__this: &dyn Any) -> Option<&dyn Any> {
///     <dyn Any>::downcast_ref::<Foo>(__this).map(|__r| &__r.field as &dyn Any)
/// }
/// ```
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let meta = &info.meta;
    let recfmt_reflect_path = meta.recfmt_reflect_path();
    let typed_ = crate::path::typed_(recfmt_reflect_path);
    let record_info_ = crate::path::record_info_(recfmt_reflect_path);
    let record_info_cell_ = crate::path::record_info_cell_(recfmt_reflect_path);
    let field_info_ = crate::path::field_info_(recfmt_reflect_path);
    let box_ = crate::path::box_(recfmt_reflect_path);

    let ident = meta.ident();
    let type_name = meta.type_name_tokens();

    let mut accessors = TokenStream::new();
    let mut field_infos = Vec::with_capacity(info.fields.len());

    for field in &info.fields {
        let member = field.ident;
        let ty = &field.data.ty;
        let getter = Ident::new(&format!("__get_{}", field.index), Span::call_site());
        let setter = Ident::new(&format!("__set_{}", field.index), Span::call_site());

        accessors.extend(quote! {
            fn #getter(__this: &dyn ::core::any::Any) -> ::core::option::Option<&dyn ::core::any::Any> {
                <dyn ::core::any::Any>::downcast_ref::<#ident>(__this)
                    .map(|__r| &__r.#member as &dyn ::core::any::Any)
            }

            fn #setter(
                __this: &mut dyn ::core::any::Any,
                __value: #box_<dyn ::core::any::Any>,
            ) -> ::core::result::Result<(), #box_<dyn ::core::any::Any>> {
                let ::core::option::Option::Some(__r) =
                    <dyn ::core::any::Any>::downcast_mut::<#ident>(__this)
                else {
                    return ::core::result::Result::Err(__value);
                };
                __r.#member = *__value.downcast::<#ty>()?;
                ::core::result::Result::Ok(())
            }
        });

        let name = field.name_tokens();
        let transient = field.is_transient();
        field_infos.push(quote! {
            #field_info_::new::<#ty>(#name, #getter, #setter).with_transient(#transient)
        });
    }

    quote! {
        impl #typed_ for #ident {
            fn record_info() -> &'static #record_info_ {
                #accessors

                static CELL: #record_info_cell_ = #record_info_cell_::new();
                CELL.get_or_init(|| {
                    #record_info_::new::<Self>(#type_name, &[ #(#field_infos),* ])
                })
            }
        }
    }
}
