#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::parameter::AnonymousBinding;
use crate::api::{Binding, ParameterParser, Parameters};
use crate::error::BindError;
use crate::prelude::Coercible;

/// The declarative binder, mapping parsed [`Parameters`] onto fields.
///
/// ### Example
/// ```
/// # use argbind_core as argbind;
/// use argbind::{Binder, Binding, ParameterParser, Scalar, Switch};
///
/// let mut path = String::default();
/// let mut device = String::default();
/// let mut timeout: i32 = 0;
/// let mut forced = false;
/// let parameters = ParameterParser::new()
///     .parse(&["--path=X", "-device=C:", "-g", "--timeout=45"])
///     .unwrap();
///
/// Binder::new()
///     .add(Binding::parameter(Scalar::new(&mut path), "path").required())
///     .add(Binding::parameter(Scalar::new(&mut device), "device"))
///     .add(Binding::parameter(Scalar::new(&mut timeout), "timeout").position(0).required())
///     .add(Binding::option(Switch::new(&mut forced), "-g"))
///     .bind(&parameters)
///     .unwrap();
///
/// assert_eq!(path, "X");
/// assert_eq!(device, "C:");
/// assert_eq!(timeout, 45);
/// assert!(forced);
/// ```
#[derive(Default)]
pub struct Binder<'a> {
    bindings: Vec<Box<dyn AnonymousBinding + 'a>>,
}

impl<'a> Binder<'a> {
    /// Create an empty binder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field binding.
    pub fn add<T: Coercible + 'a>(mut self, binding: Binding<'a, T>) -> Self {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Binder adding {binding:?}.");
        }

        self.bindings.push(Box::new(binding));
        self
    }

    /// Bind the `parameters` onto the fields.
    ///
    /// Every binding is validated before any field is written, so a [`ConfigError`](crate::ConfigError) leaves all the fields untouched.
    /// The bindings are then resolved in the order they were added; the first [`AccessError`](crate::AccessError) stops the binding.
    pub fn bind(self, parameters: &Parameters) -> Result<(), BindError> {
        for binding in &self.bindings {
            binding.validate()?;
        }

        for mut binding in self.bindings {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Binder resolving {binding:?}.");
            }

            binding.bind(parameters)?;
        }

        Ok(())
    }
}

/// Behaviour for a type whose fields bind from the command line.
///
/// Typically implemented via `#[derive(ArgBind)]`.
///
/// ### Example
/// ```
/// # use argbind_core as argbind;
/// use argbind::{Bindable, Binder, Binding, Scalar, Switch};
///
/// #[derive(Debug, Default)]
/// struct Config {
///     name: String,
///     verbose: bool,
/// }
///
/// impl Bindable for Config {
///     fn binder(&mut self) -> Binder<'_> {
///         Binder::new()
///             .add(Binding::parameter(Scalar::new(&mut self.name), "name").position(0).required())
///             .add(Binding::option(Switch::new(&mut self.verbose), "-v"))
///     }
/// }
///
/// let config = Config::from_tokens(&["Dieter", "-v"]).unwrap();
/// assert_eq!(config.name, "Dieter");
/// assert!(config.verbose);
/// ```
pub trait Bindable {
    /// The binder for this value's fields.
    fn binder(&mut self) -> Binder<'_>;

    /// The option parsing mode used by [`Bindable::from_tokens`].
    fn option_parsing() -> bool
    where
        Self: Sized,
    {
        true
    }

    /// Parse the `tokens` and bind them onto a default value.
    fn from_tokens(tokens: &[&str]) -> Result<Self, BindError>
    where
        Self: Default + Sized,
    {
        let parameters = ParameterParser::new()
            .option_parsing(Self::option_parsing())
            .parse(tokens)?;
        let mut target = Self::default();
        parameters.bind(&mut target)?;
        Ok(target)
    }

    /// Parse the Cli [`std::env::args`] and bind them onto a default value.
    ///
    /// On error, prints the message to stderr and exits with code 1.
    fn from_env() -> Self
    where
        Self: Default + Sized,
    {
        let command_input: Vec<String> = std::env::args().skip(1).collect();
        let tokens: Vec<&str> = command_input.iter().map(AsRef::as_ref).collect();

        match Self::from_tokens(tokens.as_slice()) {
            Ok(target) => target,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
