use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = meta.attrs().auto_register {
        let auto_register_ = crate::path::auto_register_(meta.recfmt_reflect_path());
        let ident = meta.ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    <#ident as #auto_register_::__RegisterType>::__register
                )
            }
        }
    } else {
        proc_macro2::TokenStream::new()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
