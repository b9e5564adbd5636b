mod attribute;
mod bindable;
mod field;

use crate::model::{DeriveValue, IntermediateAttributes};

pub(self) const ATTRIBUTE: &str = "argbind";

pub(self) fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field `{field_name}` cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

/// Merge all the `#[argbind(..)]` attributes, rejecting any key outside `known`.
pub(self) fn load_attributes(
    attrs: &[syn::Attribute],
    known: &[&str],
) -> Result<IntermediateAttributes, syn::Error> {
    attrs
        .iter()
        .filter(|attribute| attribute.path().is_ident(ATTRIBUTE))
        .try_fold(IntermediateAttributes::default(), |mut attributes, attribute| {
            attributes.absorb(attribute, known)?;
            Ok(attributes)
        })
}

pub(self) fn first_value<'a>(
    attributes: &'a IntermediateAttributes,
    key: &str,
) -> Option<&'a DeriveValue> {
    attributes.pairs.get(key).map(|values| {
        values
            .first()
            .expect("internal error - attribute pair must contain non-empty values")
    })
}
