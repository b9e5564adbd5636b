/// Marker trait for capturable types that can bind a value parameter (named and/or positional).
pub trait ParameterField {}

/// Marker trait for capturable types that can bind an option (presence-only flag).
pub trait OptionField {}

/// Behaviour to capture an explicit generic type T into a target variable.
///
/// We use this at the bottom of the binder object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericCapturable<'a, T> {
    /// Capture the resolved value into the target variable.
    fn capture(&mut self, value: T);
}
