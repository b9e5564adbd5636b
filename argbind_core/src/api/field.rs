use crate::api::capture::*;

/// A value parameter that binds into a single variable.
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> ParameterField for Scalar<'a, T> {}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar field.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T> {
    fn capture(&mut self, value: T) {
        *self.variable = value;
    }
}

/// An option field, set to whether the option token was passed.
pub struct Switch<'a> {
    variable: &'a mut bool,
}

impl<'a> OptionField for Switch<'a> {}

impl<'a> Switch<'a> {
    /// Create a switch field.
    pub fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> GenericCapturable<'a, bool> for Switch<'a> {
    fn capture(&mut self, value: bool) {
        *self.variable = value;
    }
}
