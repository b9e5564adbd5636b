use crate::load::ATTRIBUTE;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

enum AttributeEntry {
    Flag(String),
    Pair(String, DeriveValue),
}

impl AttributeEntry {
    fn key(&self) -> &str {
        match self {
            AttributeEntry::Flag(key) | AttributeEntry::Pair(key, _) => key,
        }
    }
}

fn read_entry(expression: &syn::Expr) -> Result<AttributeEntry, syn::Error> {
    let unparseable = || {
        syn::Error::new_spanned(
            expression,
            format!(
                "Invalid - unparseable attribute `{}`.",
                expression.to_token_stream()
            ),
        )
    };

    match expression {
        syn::Expr::Assign(assignment) => Ok(AttributeEntry::Pair(
            assignment.left.to_token_stream().to_string(),
            DeriveValue {
                tokens: assignment.right.to_token_stream(),
            },
        )),
        syn::Expr::Path(path) => path
            .path
            .get_ident()
            .map(|ident| AttributeEntry::Flag(ident.to_string()))
            .ok_or_else(unparseable),
        _ => Err(unparseable()),
    }
}

impl IntermediateAttributes {
    /// Merge the entries of one `#[argbind(..)]` attribute, rejecting any key outside `known`.
    pub(crate) fn absorb(
        &mut self,
        attribute: &syn::Attribute,
        known: &[&str],
    ) -> Result<(), syn::Error> {
        let expressions = attribute.parse_args_with(
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
        )?;

        for expression in &expressions {
            let entry = read_entry(expression)?;

            if !known.contains(&entry.key()) {
                return Err(syn::Error::new_spanned(
                    expression,
                    format!(
                        "Invalid - unknown attribute `#[{ATTRIBUTE}({})]`.",
                        entry.key()
                    ),
                ));
            }

            match entry {
                AttributeEntry::Flag(key) => {
                    self.singletons.insert(key);
                }
                AttributeEntry::Pair(key, value) => {
                    self.pairs.entry(key).or_default().push(value);
                }
            }
        }

        Ok(())
    }
}
