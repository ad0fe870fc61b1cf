// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod auto_register;
mod trait_get_type_meta;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use auto_register::get_auto_register_impl;
use trait_get_type_meta::impl_trait_get_type_meta;
use trait_typed::impl_trait_typed;
