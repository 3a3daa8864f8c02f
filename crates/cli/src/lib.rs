//! Interactive client for creating, reading, updating, listing and deleting
//! Jira issues.

pub mod commands;
pub mod shell;
pub mod terminal;

pub use shell::{MenuChoice, Shell, ShellExit};
pub use terminal::{InputClosed, Terminal};
