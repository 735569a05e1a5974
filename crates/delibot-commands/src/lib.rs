//! # Delibot Commands
//!
//! Discord command implementations using Poise framework for Delibot.
//!
//! This crate wires the prefix commands into a Poise framework, restricts
//! them to the configured channels and converts Discord models into the
//! workspace's own identifier and message types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod echo;
pub mod framework;
pub mod ping;

pub use framework::*;
