use thiserror::Error;

/// Error raised while parsing the command line tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The same named parameter was supplied more than once.
    #[error("Parse error: parameter '{0}' is already set.")]
    DuplicateParameter(String),
    /// A named parameter used the `$` prefix reserved for positional keys.
    #[error("Parse error: parameter name '{0}' uses the reserved '$' prefix.")]
    ReservedName(String),
}

/// Error raised while reading a value out of the parsed [`Parameters`](crate::Parameters).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A named lookup did not find the parameter.
    #[error("Parameter '{0}' was not passed.")]
    MissingNamed(String),

    /// A positional lookup did not find the parameter.
    #[error("Positional parameter {0} was not passed.")]
    MissingPositional(usize),

    /// A required name-or-position lookup found neither.
    #[error("{}", missing_message(.name, .position))]
    MissingParameter {
        /// The queried name.
        name: String,
        /// The queried fallback position, if any.
        position: Option<usize>,
    },

    /// The stored value does not parse as the requested type.
    #[error("Parameter '{key}' cannot convert '{token}' to {type_name}.")]
    TypeCoercion {
        /// The store key (the name, or `$<position>`).
        key: String,
        /// The raw stored value.
        token: String,
        /// The requested type.
        type_name: &'static str,
    },
}

fn missing_message(name: &str, position: &Option<usize>) -> String {
    match position {
        Some(position) => format!(
            "Required parameter '{name}' exists neither as a named parameter nor at position {position}."
        ),
        None => format!("Required parameter '{name}' does not exist."),
    }
}

/// Error in the binding declaration, detected when binding (not when parsing).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Error raised by the binding entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// See [`AccessError`].
    #[error(transparent)]
    Access(#[from] AccessError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        AccessError::MissingNamed("abc".to_string()),
        "Parameter 'abc' was not passed."
    )]
    #[case(AccessError::MissingPositional(3), "Positional parameter 3 was not passed.")]
    #[case(
        AccessError::MissingParameter { name: "abc".to_string(), position: None },
        "Required parameter 'abc' does not exist."
    )]
    #[case(
        AccessError::MissingParameter { name: "abc".to_string(), position: Some(1) },
        "Required parameter 'abc' exists neither as a named parameter nor at position 1."
    )]
    #[case(
        AccessError::TypeCoercion { key: "$0".to_string(), token: "x".to_string(), type_name: "i32" },
        "Parameter '$0' cannot convert 'x' to i32."
    )]
    fn access_error_message(#[case] error: AccessError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(
        ParseError::DuplicateParameter("abc".to_string()),
        "Parse error: parameter 'abc' is already set."
    )]
    #[case(
        ParseError::ReservedName("$0".to_string()),
        "Parse error: parameter name '$0' uses the reserved '$' prefix."
    )]
    fn parse_error_message(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn bind_error_transparent() {
        let error = BindError::from(ParseError::DuplicateParameter("abc".to_string()));
        assert_eq!(
            error.to_string(),
            "Parse error: parameter 'abc' is already set."
        );

        let error = BindError::from(ConfigError("broken".to_string()));
        assert_eq!(error.to_string(), "Config error: broken");
    }
}
