//! # Delibot Common
//!
//! Shared types, utilities, and common functionality for Delibot.
//!
//! This crate provides the identifier newtypes, the message model and reply
//! formatter, project-root discovery and logging setup used by every other
//! crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod message;
pub mod paths;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use message::*;
pub use paths::*;
pub use types::*;
