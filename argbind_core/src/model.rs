use crate::constant::{LONG_PREFIX, SHORT_PREFIX};

/// The dash prefix of a named token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `--`: the long form, such as `--name=value`.
    Long,
    /// `-`: the short form, such as `-n=value`.
    Short,
}

impl Prefix {
    /// The literal prefix text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Long => LONG_PREFIX,
            Prefix::Short => SHORT_PREFIX,
        }
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classification of a (trimmed) command line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A dash prefixed token: a named parameter or an option.
    Named(Prefix),
    /// Any token not starting with `-`.
    Positional,
}
