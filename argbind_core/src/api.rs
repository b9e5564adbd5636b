mod binder;
mod capture;
mod core;
mod field;
mod parameter;
mod value;

pub use self::core::*;
pub use binder::*;
pub use capture::*;
pub use field::*;
pub use parameter::*;
