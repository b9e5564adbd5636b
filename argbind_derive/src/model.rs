use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FieldKind {
    Parameter {
        position: Option<DeriveValue>,
        required: bool,
    },
    Option,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub name: DeriveValue,
    pub kind: FieldKind,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveBindable {
    pub struct_name: syn::Ident,
    pub option_parsing: Option<DeriveValue>,
    pub fields: Vec<DeriveField>,
}
