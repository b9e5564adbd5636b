use indexmap::{IndexMap, IndexSet};

use crate::constant::POSITIONAL_PREFIX;
use crate::error::ParseError;
use crate::tokens::positional_key;

/// The raw parse result: string values by key, plus the option tokens.
///
/// Positional values live under the reserved `$<n>` keys, so a named parameter may not start with `$`.
/// Values are never coerced here; that happens at read time.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ParameterStore {
    values: IndexMap<String, String>,
    positional_count: usize,
    options: IndexSet<String>,
}

impl ParameterStore {
    pub(crate) fn add_positional(&mut self, value: impl Into<String>) {
        let key = positional_key(self.positional_count);
        self.positional_count += 1;
        self.values.insert(key, value.into());
    }

    pub(crate) fn add_named(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ParseError> {
        let name = name.into();

        if name.starts_with(POSITIONAL_PREFIX) {
            return Err(ParseError::ReservedName(name));
        }

        if self.values.contains_key(&name) {
            return Err(ParseError::DuplicateParameter(name));
        }

        self.values.insert(name, value.into());
        Ok(())
    }

    pub(crate) fn add_option(&mut self, name: impl Into<String>) {
        self.options.insert(name.into());
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn has_option(&self, name: &str) -> bool {
        self.options.contains(name)
    }

    pub(crate) fn positional_count(&self) -> usize {
        self.positional_count
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}
