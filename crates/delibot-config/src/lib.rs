//! # Delibot Config
//!
//! Type-safe configuration loading and validation for Delibot.
//!
//! A [`Config`] is built once at startup, either from a JSON file with
//! [`load_config`] or from the process environment with
//! [`Config::from_env`], and is immutable afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod env;
pub mod error;
pub mod loader;
pub mod schema;

pub use defaults::*;
pub use env::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
