use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Bindable;
use crate::error::{AccessError, BindError, ParseError};
use crate::matcher::TokenMatcher;
use crate::prelude::Coercible;
use crate::store::ParameterStore;
use crate::tokens::positional_key;

/// The command line parser configuration.
///
/// A parser is consumed by [`ParameterParser::parse`], so each token sequence gets a fresh parser.
///
/// ### Example
/// ```
/// # use argbind_core as argbind;
/// use argbind::ParameterParser;
///
/// let parameters = ParameterParser::new()
///     .parse(&["--name=Dieter", "-f", "test"])
///     .unwrap();
///
/// assert_eq!(parameters.named::<String>("name").unwrap(), "Dieter");
/// assert_eq!(parameters.positional::<String>(0).unwrap(), "test");
/// assert!(parameters.has_option("-f"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterParser {
    option_parsing: bool,
}

impl Default for ParameterParser {
    fn default() -> Self {
        Self {
            option_parsing: true,
        }
    }
}

impl ParameterParser {
    /// Create a command line parser, with option parsing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the option parsing mode.
    ///
    /// When enabled (the default), a dash token without `=` is recorded as an option (ex: `-f`).
    /// When disabled, such a token names a parameter whose value is the next token (ex: `--name Dieter`).
    ///
    /// ### Example
    /// ```
    /// # use argbind_core as argbind;
    /// use argbind::ParameterParser;
    ///
    /// let parameters = ParameterParser::new()
    ///     .option_parsing(false)
    ///     .parse(&["--name", "Dieter"])
    ///     .unwrap();
    ///
    /// assert_eq!(parameters.named::<String>("name").unwrap(), "Dieter");
    /// assert!(!parameters.has_option("--name"));
    /// ```
    pub fn option_parsing(mut self, enabled: bool) -> Self {
        self.option_parsing = enabled;
        self
    }

    /// Set the option parsing mode in place.
    /// See [`ParameterParser::option_parsing`].
    pub fn set_option_parsing(&mut self, enabled: bool) {
        self.option_parsing = enabled;
    }

    /// Whether a dash token without `=` is recorded as an option.
    pub fn is_option_parsing(&self) -> bool {
        self.option_parsing
    }

    /// Parse the input tokens in a single pass.
    ///
    /// Each token is trimmed, then classified as a positional value, a named parameter, or an option.
    /// A named parameter supplied twice stops the parse with [`ParseError::DuplicateParameter`].
    /// A name starting with `$` (ex: `--$0=x`) stops the parse with [`ParseError::ReservedName`].
    pub fn parse(self, tokens: &[&str]) -> Result<Parameters, ParseError> {
        let store = TokenMatcher::new(self.option_parsing).consume(tokens)?;
        Ok(Parameters { store })
    }

    /// Parse the Cli [`env::args`], skipping the program name.
    pub fn parse_env(self) -> Result<Parameters, ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }
}

/// The parsed named parameters, positional parameters, and options.
///
/// Values are stored as raw strings and converted on read via [`Coercible`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    store: ParameterStore,
}

impl Parameters {
    /// Whether the named parameter was passed.
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// Whether a positional parameter exists at `position` (zero based).
    pub fn contains_position(&self, position: usize) -> bool {
        self.store.contains(&positional_key(position))
    }

    /// Whether the option token was passed.
    /// The lookup includes the prefix: use `-f`, not `f`.
    pub fn has_option(&self, option: &str) -> bool {
        self.store.has_option(option)
    }

    /// The number of positional parameters.
    pub fn positional_count(&self) -> usize {
        self.store.positional_count()
    }

    /// All the stored `(key, value)` entries, in the order they were parsed.
    /// Positional entries use the `$<position>` key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.store.iter()
    }

    /// All the option tokens, in the order they were first parsed.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.store.options()
    }

    /// Read the named parameter as `T`.
    ///
    /// ### Example
    /// ```
    /// # use argbind_core as argbind;
    /// use argbind::{AccessError, ParameterParser};
    ///
    /// let parameters = ParameterParser::new().parse(&["-length=2"]).unwrap();
    ///
    /// assert_eq!(parameters.named::<i32>("length").unwrap(), 2);
    /// assert_eq!(
    ///     parameters.named::<i32>("width").unwrap_err(),
    ///     AccessError::MissingNamed("width".to_string())
    /// );
    /// ```
    pub fn named<T: Coercible>(&self, name: &str) -> Result<T, AccessError> {
        match self.store.get(name) {
            Some(token) => coerce(name, token),
            None => Err(AccessError::MissingNamed(name.to_string())),
        }
    }

    /// Read the positional parameter (zero based) as `T`.
    pub fn positional<T: Coercible>(&self, position: usize) -> Result<T, AccessError> {
        let key = positional_key(position);
        match self.store.get(&key) {
            Some(token) => coerce(&key, token),
            None => Err(AccessError::MissingPositional(position)),
        }
    }

    /// Read the named parameter as `T`, tolerating its absence.
    pub fn optional_named<T: Coercible>(&self, name: &str) -> Result<Option<T>, AccessError> {
        match self.store.get(name) {
            Some(token) => coerce(name, token).map(Some),
            None => Ok(None),
        }
    }

    /// Read a parameter as `T`, by name first and then by `position`.
    ///
    /// If neither resolves, a `required` parameter fails with [`AccessError::MissingParameter`].
    /// Otherwise the zero value (`T::default()`) is returned.
    ///
    /// ### Example
    /// ```
    /// # use argbind_core as argbind;
    /// use argbind::ParameterParser;
    ///
    /// let parameters = ParameterParser::new().parse(&["45"]).unwrap();
    ///
    /// assert_eq!(parameters.parameter::<i32>("timeout", Some(0), true).unwrap(), 45);
    /// assert_eq!(parameters.parameter::<i32>("retries", None, false).unwrap(), 0);
    /// assert!(parameters.parameter::<i32>("retries", None, true).is_err());
    /// ```
    pub fn parameter<T: Coercible>(
        &self,
        name: &str,
        position: Option<usize>,
        required: bool,
    ) -> Result<T, AccessError> {
        if self.contains(name) {
            return self.named(name);
        }

        if let Some(position) = position.filter(|p| self.contains_position(*p)) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Read parameter '{name}' from position {position}.");
            }

            return self.positional(position);
        }

        if required {
            Err(AccessError::MissingParameter {
                name: name.to_string(),
                position,
            })
        } else {
            Ok(T::default())
        }
    }

    /// Bind the parameters onto the `target`.
    /// See [`Binder::bind`](crate::Binder::bind).
    pub fn bind(&self, target: &mut impl Bindable) -> Result<(), BindError> {
        target.binder().bind(self)
    }
}

fn coerce<T: Coercible>(key: &str, token: &str) -> Result<T, AccessError> {
    T::coerce(token).ok_or_else(|| AccessError::TypeCoercion {
        key: key.to_string(),
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}
