//! `argbind` is a small command line parser for Rust.
//!
//! It reads a sequence of command line tokens in a single pass, and stores three kinds of parameters:
//! * *Positional parameters*: tokens not starting with `-`, identified by their order of appearance (zero based).
//! * *Named parameters*: `--name=value` or `-name=value` (or `--name value`, when option parsing is disabled).
//! * *Options*: presence-only flags such as `-f` or `--force`, recorded with their prefix.
//!
//! Values are kept as strings and converted on read into the requested type via [`prelude::Coercible`].
//! Surrounding quotes are removed from values (see [`tokens::strip_quotes`]).
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```
//! use argbind::prelude::*;
//! use argbind::{derive::*, Binder, Binding, Scalar, Switch};
//!
//! #[derive(Debug, Default, ArgBind)]
//! struct Settings {
//!     #[argbind(required)]
//!     path: String,
//!     device: String,
//!     #[argbind(position = 0, required)]
//!     timeout: i32,
//!     #[argbind(name = "-g")]
//!     forced: bool,
//! }
//!
//! let settings = Settings::from_tokens(&["--path=X", "-device=C:", "-g", "--timeout=45"]).unwrap();
//! assert_eq!(settings.path, "X");
//! assert_eq!(settings.device, "C:");
//! assert_eq!(settings.timeout, 45);
//! assert!(settings.forced);
//! ```
//! or equivalently via builder Api (this page):
//! ```
//! use argbind::{Binder, Binding, ParameterParser, Scalar, Switch};
//!
//! let mut path = String::default();
//! let mut device = String::default();
//! let mut timeout: i32 = 0;
//! let mut forced = false;
//!
//! let parameters = ParameterParser::new()
//!     .parse(&["--path=X", "-device=C:", "-g", "--timeout=45"])
//!     .unwrap();
//! Binder::new()
//!     .add(Binding::parameter(Scalar::new(&mut path), "path").required())
//!     .add(Binding::parameter(Scalar::new(&mut device), "device"))
//!     .add(Binding::parameter(Scalar::new(&mut timeout), "timeout").position(0).required())
//!     .add(Binding::option(Switch::new(&mut forced), "-g"))
//!     .bind(&parameters)
//!     .unwrap();
//!
//! assert_eq!(path, "X");
//! assert_eq!(timeout, 45);
//! ```
//!
//! # Builder Api
//! Start with a [`ParameterParser`], which configures the *option parsing* mode (enabled by default).
//! When enabled, a dash token without `=` is an option.
//! When disabled, a dash token without `=` names a parameter and the next token is its value:
//! ```
//! use argbind::ParameterParser;
//!
//! let parameters = ParameterParser::new()
//!     .option_parsing(false)
//!     .parse(&["--name", "Dieter", "-length", "2", "test"])
//!     .unwrap();
//!
//! assert_eq!(parameters.named::<String>("name").unwrap(), "Dieter");
//! assert_eq!(parameters.named::<i32>("length").unwrap(), 2);
//! assert_eq!(parameters.positional::<String>(0).unwrap(), "test");
//! ```
//!
//! Reading from [`Parameters`] is typed: [`Parameters::named`], [`Parameters::positional`], and [`Parameters::parameter`] (name first, then a positional fallback).
//! A missing or unconvertible value is reported as an [`AccessError`].
//!
//! Declarative binding maps the parameters onto variables with a [`Binder`] of [`Binding`]s.
//! Each binding takes a *field*: [`Scalar`] for value parameters, [`Switch`] for options.
//! All the bindings are validated before any field is written:
//! only a required parameter may declare a positional fallback, otherwise a [`ConfigError`] is reported.
//!
//! # Errors
//! * [`ParseError`]: a named parameter was supplied twice, or its name uses the `$` prefix reserved for positional keys.
//! * [`AccessError`]: a value is missing, or cannot be converted.
//! * [`ConfigError`]: a binding declaration is invalid.
//! * [`BindError`]: any of the above, from the binding entry points.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for the token matcher and the binder.
pub use argbind_core::*;

pub mod derive;
