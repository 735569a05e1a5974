//! # Delibot
//!
//! Minimal Discord bot answering prefix commands.
//!
//! This is the main binary crate that orchestrates the application lifecycle
//! using the Poise framework for Discord interactions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod diagnostics;
pub mod error;
pub mod startup;

pub use bot::*;
pub use error::*;
pub use startup::*;
