#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{GenericCapturable, OptionField, ParameterField, Parameters};
use crate::error::{AccessError, ConfigError};
use crate::prelude::Coercible;

pub(crate) trait AnonymousBinding: std::fmt::Debug {
    fn validate(&self) -> Result<(), ConfigError>;

    fn bind(&mut self, parameters: &Parameters) -> Result<(), AccessError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingClass {
    Parameter,
    Option,
}

/// A field binding for the [`Binder`](crate::Binder).
///
/// A binding either reads a value parameter (by name, with an optional positional fallback), or an option.
pub struct Binding<'a, T> {
    class: BindingClass,
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
    name: String,
    position: Option<usize>,
    required: bool,
    presence: Option<fn(bool) -> T>,
}

impl<'a, T> std::fmt::Debug for Binding<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.class {
            BindingClass::Parameter => "Parameter",
            BindingClass::Option => "Option",
        };
        let position = match &self.position {
            Some(p) => format!(", ${p}"),
            None => "".to_string(),
        };
        let required = if self.required { ", required" } else { "" };

        write!(
            f,
            "{class}[{t}, {name}{position}{required}]",
            t = std::any::type_name::<T>(),
            name = self.name,
        )
    }
}

impl<'a, T: Coercible> Binding<'a, T> {
    /// Create a value parameter binding, looked up by `name`.
    ///
    /// The parameter is not required and has no positional fallback until configured otherwise.
    ///
    /// ### Example
    /// ```
    /// # use argbind_core as argbind;
    /// use argbind::{Binder, Binding, ParameterParser, Scalar};
    ///
    /// let mut timeout: i32 = 0;
    /// let parameters = ParameterParser::new().parse(&["45"]).unwrap();
    ///
    /// Binder::new()
    ///     .add(Binding::parameter(Scalar::new(&mut timeout), "timeout").position(0).required())
    ///     .bind(&parameters)
    ///     .unwrap();
    ///
    /// assert_eq!(timeout, 45);
    /// ```
    pub fn parameter(
        field: impl GenericCapturable<'a, T> + ParameterField + 'a,
        name: impl Into<String>,
    ) -> Self {
        Self {
            class: BindingClass::Parameter,
            field: Box::new(field),
            name: name.into(),
            position: None,
            required: false,
            presence: None,
        }
    }
}

impl<'a> Binding<'a, bool> {
    /// Create an option binding, matched against the option token `name` (including its prefix).
    ///
    /// The field is always written: `true` when the option was passed, `false` otherwise.
    ///
    /// ### Example
    /// ```
    /// # use argbind_core as argbind;
    /// use argbind::{Binder, Binding, ParameterParser, Switch};
    ///
    /// let mut forced = false;
    /// let parameters = ParameterParser::new().parse(&["-g"]).unwrap();
    ///
    /// Binder::new()
    ///     .add(Binding::option(Switch::new(&mut forced), "-g"))
    ///     .bind(&parameters)
    ///     .unwrap();
    ///
    /// assert!(forced);
    /// ```
    pub fn option(
        field: impl GenericCapturable<'a, bool> + OptionField + 'a,
        name: impl Into<String>,
    ) -> Self {
        Self {
            class: BindingClass::Option,
            field: Box::new(field),
            name: name.into(),
            position: None,
            required: false,
            presence: Some(std::convert::identity),
        }
    }
}

impl<'a, T> Binding<'a, T> {
    /// Fall back to the positional parameter at `position` (zero based) when the name is absent.
    /// Only a required parameter may declare a position.
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Require the parameter: binding fails when it cannot be resolved.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn config_error(&self, message: impl std::fmt::Display) -> ConfigError {
        ConfigError(format!("binding '{n}' {message}", n = self.name))
    }
}

impl<'a, T: Coercible> AnonymousBinding for Binding<'a, T> {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError("binding name cannot be empty.".to_string()));
        }

        match self.class {
            BindingClass::Parameter => {
                if let (Some(position), false) = (self.position, self.required) {
                    return Err(self.config_error(format!(
                        "declares position {position} but is not required."
                    )));
                }
            }
            BindingClass::Option => {
                if self.position.is_some() {
                    return Err(self.config_error("is an option and cannot declare a position."));
                }

                if self.required {
                    return Err(self.config_error("is an option and cannot be required."));
                }
            }
        }

        Ok(())
    }

    fn bind(&mut self, parameters: &Parameters) -> Result<(), AccessError> {
        let value = match (self.presence, self.position, self.required) {
            (Some(presence), _, _) => Some(presence(parameters.has_option(&self.name))),
            (None, Some(position), required) => {
                Some(parameters.parameter::<T>(&self.name, Some(position), required)?)
            }
            (None, None, true) => Some(parameters.named::<T>(&self.name)?),
            (None, None, false) => parameters.optional_named::<T>(&self.name)?,
        };

        match value {
            Some(value) => {
                self.field.capture(value);
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("{self:?} is absent; the field keeps its initial value.");
                }
            }
        }

        Ok(())
    }
}
