//! Traits which, typically, may be imported without concern: `use argbind::prelude::*`.
pub use crate::api::Bindable;

/// Behaviour for scalar types that a stored string value may be read as.
///
/// The zero value of a type is its [`Default`], which is returned for absent non-required parameters.
// Needs to be imported in order to implement a custom `Coercible`.
pub trait Coercible: Default + Sized {
    /// Convert the raw stored value, or `None` when it does not represent this type.
    fn coerce(token: &str) -> Option<Self>;
}
