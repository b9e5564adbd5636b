//! Core module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod matcher;
mod model;
#[allow(missing_docs)]
pub mod prelude;
mod store;
pub mod tokens;

pub use api::*;
pub use error::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
