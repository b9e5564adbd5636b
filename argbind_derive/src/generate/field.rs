use crate::model::{DeriveField, FieldKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveField {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveField {
            field_name,
            name,
            kind,
        } = self;
        let name = name.tokens;

        match kind {
            FieldKind::Option => quote! {
                binder = binder.add(Binding::option(Switch::new(&mut self.#field_name), #name));
            },
            FieldKind::Parameter { position, required } => {
                let position = position.map(|position| {
                    let position = position.tokens;
                    quote! { .position(#position) }
                });
                let required = if required {
                    Some(quote! { .required() })
                } else {
                    None
                };

                quote! {
                    binder = binder.add(Binding::parameter(Scalar::new(&mut self.#field_name), #name)#position #required);
                }
            }
        }
    }
}
