//! Interactive command layer.
//!
//! - **parser**: turns a line of user input into a [`Command`]
//! - **handlers**: runs a [`Command`] against a [`crate::services::ContactService`]

pub mod handlers;
pub mod parser;

pub use handlers::{handle, Response, HELP_TEXT};
pub use parser::{parse, Command};
