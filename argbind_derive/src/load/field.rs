use crate::load::{first_value, incompatible_error, load_attributes, ATTRIBUTE};
use crate::model::{DeriveField, DeriveValue, FieldKind};
use proc_macro2::Literal;
use quote::ToTokens;
use syn::ext::IdentExt;

const FIELD_ATTRIBUTES: [&str; 5] = ["name", "position", "required", "option", "parameter"];
const CONTAINER_TYPES: [&str; 4] = ["Option", "Vec", "HashSet", "HashMap"];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .expect("internal error - named field must have an ident");
        let attributes = load_attributes(&value.attrs, &FIELD_ATTRIBUTES)?;
        let explicit_option = attributes.singletons.contains("option");
        let explicit_parameter = attributes.singletons.contains("parameter");
        let required = attributes.singletons.contains("required");
        let position = first_value(&attributes, "position").cloned();
        let name = first_value(&attributes, "name").cloned();

        if explicit_option {
            for (present, other) in [
                (explicit_parameter, "parameter"),
                (required, "required"),
                (position.is_some(), "position = .."),
            ] {
                if present {
                    return Err(incompatible_error(
                        &field_name,
                        format!("#[{ATTRIBUTE}(option)]"),
                        format!("#[{ATTRIBUTE}({other})]"),
                    ));
                }
            }
        }

        let type_name = scalar_type_name(&field_name, &value.ty)?;
        let is_bool = type_name == "bool";

        if explicit_option && !is_bool {
            return Err(syn::Error::new(
                field_name.span(),
                format!(
                    "Invalid - field `{field_name}` is `#[{ATTRIBUTE}(option)]` so must be `bool`, found `{type_name}`."
                ),
            ));
        }

        let kind = if is_bool && !explicit_parameter {
            // Options are always written, so they take no further configuration.
            for (present, other) in [(required, "required"), (position.is_some(), "position = ..")] {
                if present {
                    return Err(incompatible_error(
                        &field_name,
                        "bool option",
                        format!("#[{ATTRIBUTE}({other})]"),
                    ));
                }
            }

            FieldKind::Option
        } else {
            FieldKind::Parameter { position, required }
        };

        let name = match name {
            Some(name) => name,
            None => {
                let default_name = match &kind {
                    FieldKind::Option => format!("--{}", field_name.unraw()),
                    FieldKind::Parameter { .. } => field_name.unraw().to_string(),
                };
                DeriveValue {
                    tokens: Literal::string(&default_name).into_token_stream(),
                }
            }
        };

        Ok(DeriveField {
            field_name,
            name,
            kind,
        })
    }
}

/// The last path segment of a scalar field type.
fn scalar_type_name(field_name: &syn::Ident, ty: &syn::Type) -> Result<String, syn::Error> {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => {
                let ident = segment.ident.to_string();

                if CONTAINER_TYPES.contains(&ident.as_str()) {
                    Err(syn::Error::new_spanned(
                        ty,
                        format!(
                            "Invalid - field `{field_name}` of type `{ident}<..>` is not a scalar parameter."
                        ),
                    ))
                } else {
                    Ok(ident)
                }
            }
            None => Err(unsupported(field_name, ty)),
        },
        _ => Err(unsupported(field_name, ty)),
    }
}

fn unsupported(field_name: &syn::Ident, ty: &syn::Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        format!(
            "Invalid - field `{field_name}` has unsupported type `{}`.",
            ty.to_token_stream()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use quote::quote;
    use rstest::rstest;
    use syn::parse_quote;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }

    fn field(named: syn::FieldsNamed) -> syn::Field {
        named
            .named
            .into_iter()
            .next()
            .expect("test field must be present")
    }

    #[test]
    fn construct_derive_field_parameter() {
        // Setup
        let input = field(parse_quote! {
            { my_field: String }
        });

        // Execute
        let derive_field = DeriveField::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("my_field"),
                name: string("my_field"),
                kind: FieldKind::Parameter {
                    position: None,
                    required: false,
                },
            }
        );
    }

    #[test]
    fn construct_derive_field_parameter_configured() {
        // Setup
        let input = field(parse_quote! {
            {
                #[argbind(required, position = 0, name = "time-out")]
                timeout: i32
            }
        });

        // Execute
        let derive_field = DeriveField::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("timeout"),
                name: string("time-out"),
                kind: FieldKind::Parameter {
                    position: Some(DeriveValue {
                        tokens: quote! { 0 },
                    }),
                    required: true,
                },
            }
        );
    }

    #[test]
    fn construct_derive_field_split_attributes() {
        // Setup
        let input = field(parse_quote! {
            {
                #[argbind(required)]
                #[argbind(position = 1)]
                value: f64
            }
        });

        // Execute
        let derive_field = DeriveField::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_field.kind,
            FieldKind::Parameter {
                position: Some(DeriveValue {
                    tokens: quote! { 1 },
                }),
                required: true,
            }
        );
    }

    #[rstest]
    #[case(parse_quote! { { verbose: bool } }, "--verbose")]
    #[case(parse_quote! { { #[argbind(option)] verbose: bool } }, "--verbose")]
    #[case(parse_quote! { { #[argbind(name = "-g")] verbose: bool } }, "-g")]
    #[case(parse_quote! { { r#type: bool } }, "--type")]
    fn construct_derive_field_option(#[case] named: syn::FieldsNamed, #[case] expected: &str) {
        // Execute
        let derive_field = DeriveField::try_from(&field(named)).unwrap();

        // Verify
        assert_eq!(derive_field.kind, FieldKind::Option);
        assert_eq!(derive_field.name, string(expected));
    }

    #[test]
    fn construct_derive_field_bool_parameter() {
        // Setup
        let input = field(parse_quote! {
            { #[argbind(parameter, required)] enabled: bool }
        });

        // Execute
        let derive_field = DeriveField::try_from(&input).unwrap();

        // Verify
        assert_eq!(derive_field.name, string("enabled"));
        assert_eq!(
            derive_field.kind,
            FieldKind::Parameter {
                position: None,
                required: true,
            }
        );
    }

    #[test]
    fn construct_derive_field_qualified_type() {
        let input = field(parse_quote! {
            { name: std::string::String }
        });
        let derive_field = DeriveField::try_from(&input).unwrap();
        assert_matches!(derive_field.kind, FieldKind::Parameter { .. });
    }

    #[rstest]
    #[case(parse_quote! { { #[argbind(option, parameter)] a: bool } }, "cannot be both `#[argbind(option)]` and `#[argbind(parameter)]`")]
    #[case(parse_quote! { { #[argbind(option, required)] a: bool } }, "cannot be both `#[argbind(option)]` and `#[argbind(required)]`")]
    #[case(parse_quote! { { #[argbind(option, position = 0)] a: bool } }, "cannot be both `#[argbind(option)]` and `#[argbind(position = ..)]`")]
    #[case(parse_quote! { { #[argbind(required)] a: bool } }, "cannot be both `bool option` and `#[argbind(required)]`")]
    #[case(parse_quote! { { #[argbind(option)] a: i32 } }, "must be `bool`, found `i32`")]
    #[case(parse_quote! { { a: Option<i32> } }, "of type `Option<..>` is not a scalar parameter")]
    #[case(parse_quote! { { a: Vec<i32> } }, "of type `Vec<..>` is not a scalar parameter")]
    #[case(parse_quote! { { a: std::collections::HashSet<i32> } }, "of type `HashSet<..>` is not a scalar parameter")]
    #[case(parse_quote! { { a: HashMap<String, i32> } }, "of type `HashMap<..>` is not a scalar parameter")]
    #[case(parse_quote! { { a: &'static str } }, "has unsupported type")]
    #[case(parse_quote! { { #[argbind(short = 'a')] a: i32 } }, "unknown attribute `#[argbind(short)]`")]
    fn construct_derive_field_invalid(#[case] named: syn::FieldsNamed, #[case] expected: &str) {
        // Execute
        let error = DeriveField::try_from(&field(named)).unwrap_err();

        // Verify
        assert!(
            error.to_string().contains(expected),
            "'{error}' does not contain '{expected}'"
        );
    }

    #[test]
    fn construct_derive_field_ignores_other_attributes() {
        let input = field(parse_quote! {
            { #[allow(dead_code)] a: i32 }
        });
        let derive_field = DeriveField::try_from(&input).unwrap();
        assert_eq!(derive_field.name, string("a"));
    }
}
