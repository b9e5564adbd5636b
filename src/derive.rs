//! Derive Api for `argbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(ArgBind)]`.
//! This generates the [`Bindable`](crate::Bindable) implementation for `S`, so `S::from_tokens(..)` and `S::from_env()` bind the Cli parameters onto `S`.
//! The generated code refers to the builder types unqualified, so bring them into scope along with the prelude:
//! ```
//! use argbind::prelude::*;
//! use argbind::{derive::*, Binder, Binding, Scalar};
//!
//! #[derive(Debug, Default, ArgBind)]
//! #[argbind(option_parsing = false)]
//! struct Exchange {
//!     #[argbind(required)]
//!     name: String,
//!     #[argbind(position = 0, required)]
//!     rate: f64,
//!     #[argbind(parameter)]
//!     verified: bool,
//! }
//!
//! let exchange = Exchange::from_tokens(&["--name", "Dieter", "0.25", "--verified", "TRUE"]).unwrap();
//! assert_eq!(exchange.name, "Dieter");
//! assert_eq!(exchange.rate, 0.25);
//! assert!(exchange.verified);
//! ```
//!
//! ### Field Configuration
//! The implicit binding uses the following rules:
//! ```console
//! Type        | Binding
//! -----------------------------------
//! bool        | Binding::option(Switch::new(..), "--<field>")
//! T           | Binding::parameter(Scalar::new(..), "<field>")
//! ```
//!
//! The explicit field attributes may be combined as necessary:
//! * `#[argbind(name = "..")]` to set the lookup name (options include their prefix, ex: `"-g"`).
//! * `#[argbind(required)]` to fail the binding when the parameter is absent.
//! * `#[argbind(position = N)]` to fall back to the positional parameter `N`; the parameter must also be `required`.
//! * `#[argbind(option)]` or `#[argbind(parameter)]` to explicitly bind a `bool` field as an option or a value parameter, respectively.
//!
//! Container types (`Option`, `Vec`, `HashSet`, `HashMap`) are rejected at compile time.
//! An absent, non-required parameter leaves the field at its `Default` value.
//!
//! ### Struct Configuration
//! * `#[argbind(option_parsing = false)]` to parse with option parsing disabled (see [`ParameterParser::option_parsing`](crate::ParameterParser::option_parsing)).
pub use argbind_derive::*;
