//! Line-oriented front end for the todo store.
//!
//! Reads one command per line, dispatches it to a `TodoStore` and renders the
//! resulting state. It only reads snapshots and dispatches actions; all
//! mutation goes through the store.

pub mod command;
pub mod render;

pub use command::{parse_command, Command, ParseError};
pub use render::render;
