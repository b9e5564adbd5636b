use crate::model::DeriveBindable;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveBindable> for TokenStream2 {
    fn from(value: DeriveBindable) -> Self {
        let DeriveBindable {
            struct_name,
            option_parsing,
            fields,
        } = value;

        let binder = if fields.is_empty() {
            quote! {
                Binder::new()
            }
        } else {
            let fields = fields
                .into_iter()
                .map(|field| field.generate())
                .collect::<Vec<_>>();

            quote! {
                let mut binder = Binder::new();
                #( #fields )*
                binder
            }
        };

        let option_parsing = option_parsing.map(|option_parsing| {
            let tokens = option_parsing.tokens;
            quote! {
                fn option_parsing() -> bool {
                    #tokens
                }
            }
        });

        quote! {
            impl Bindable for #struct_name {
                fn binder(&mut self) -> Binder<'_> {
                    #binder
                }

                #option_parsing
            }
        }
    }
}
