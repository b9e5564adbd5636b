use crate::load::{first_value, load_attributes};
use crate::model::{DeriveBindable, DeriveField};

const STRUCT_ATTRIBUTES: [&str; 1] = ["option_parsing"];

impl TryFrom<syn::DeriveInput> for DeriveBindable {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = load_attributes(&value.attrs, &STRUCT_ATTRIBUTES)?;
        let option_parsing = first_value(&attributes, "option_parsing").cloned();
        let struct_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                format!("Invalid - `{struct_name}` cannot be generic to derive `ArgBind`."),
            ));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let fields = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveField::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::Fields::Unit => Vec::default(),
                    syn::Fields::Unnamed(fields) => {
                        return Err(syn::Error::new_spanned(
                            fields,
                            format!("Invalid - `{struct_name}` must have named fields to derive `ArgBind`."),
                        ));
                    }
                };

                Ok(DeriveBindable {
                    struct_name: struct_name.clone(),
                    option_parsing,
                    fields,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - `{struct_name}` must be a struct to derive `ArgBind`."),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveValue, FieldKind};
    use proc_macro2::{Literal, Span};
    use quote::{quote, ToTokens};
    use rstest::rstest;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[rstest]
    #[case("struct Parameters { }")]
    #[case("struct Parameters;")]
    fn construct_derive_bindable_empty(#[case] source: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();

        // Execute
        let derive_bindable = DeriveBindable::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_bindable,
            DeriveBindable {
                struct_name: ident("Parameters"),
                option_parsing: None,
                fields: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_derive_bindable() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, ArgBind)]
                #[argbind(option_parsing = false)]
                struct Parameters {
                    #[argbind(required)]
                    path: String,
                    device: String,
                    #[argbind(position = 0, required)]
                    timeout: i32,
                    #[argbind(name = "-g")]
                    forced: bool,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_bindable = DeriveBindable::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_bindable,
            DeriveBindable {
                struct_name: ident("Parameters"),
                option_parsing: Some(DeriveValue {
                    tokens: quote! { false },
                }),
                fields: vec![
                    DeriveField {
                        field_name: ident("path"),
                        name: DeriveValue {
                            tokens: Literal::string("path").into_token_stream(),
                        },
                        kind: FieldKind::Parameter {
                            position: None,
                            required: true,
                        },
                    },
                    DeriveField {
                        field_name: ident("device"),
                        name: DeriveValue {
                            tokens: Literal::string("device").into_token_stream(),
                        },
                        kind: FieldKind::Parameter {
                            position: None,
                            required: false,
                        },
                    },
                    DeriveField {
                        field_name: ident("timeout"),
                        name: DeriveValue {
                            tokens: Literal::string("timeout").into_token_stream(),
                        },
                        kind: FieldKind::Parameter {
                            position: Some(DeriveValue {
                                tokens: quote! { 0 },
                            }),
                            required: true,
                        },
                    },
                    DeriveField {
                        field_name: ident("forced"),
                        name: DeriveValue {
                            tokens: Literal::string("-g").into_token_stream(),
                        },
                        kind: FieldKind::Option,
                    },
                ],
            }
        );
    }

    #[rstest]
    #[case("struct Parameters(String);", "must have named fields")]
    #[case("enum Parameters { A, B }", "must be a struct")]
    #[case("struct Parameters<T> { a: T }", "cannot be generic")]
    #[case(
        "#[argbind(program = \"abc\")] struct Parameters { }",
        "unknown attribute `#[argbind(program)]`"
    )]
    #[case(
        "struct Parameters { #[argbind(option)] a: i32 }",
        "must be `bool`"
    )]
    fn construct_derive_bindable_invalid(#[case] source: &str, #[case] expected: &str) {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(source).unwrap();

        // Execute
        let error = DeriveBindable::try_from(input).unwrap_err();

        // Verify
        assert!(
            error.to_string().contains(expected),
            "'{error}' does not contain '{expected}'"
        );
    }
}
