extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveBindable;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

/// Derive `Bindable` for a struct with named fields.
///
/// Field attributes `#[argbind(..)]`:
/// * `name = ".."`: the lookup name (default: the field name, or `--<field name>` for an option).
/// * `position = N`: the positional fallback (zero based), for a required parameter.
/// * `required`: fail the binding when the parameter cannot be resolved.
/// * `option`: bind the field as an option (`bool` only); this is the default for `bool` fields.
/// * `parameter`: bind a `bool` field as a value parameter.
///
/// Struct attribute `#[argbind(option_parsing = ..)]` overrides `Bindable::option_parsing`.
#[proc_macro_derive(ArgBind, attributes(argbind))]
pub fn argbind(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveBindable::try_from(derive_input) {
        Ok(bindable) => TokenStream2::from(bindable).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
