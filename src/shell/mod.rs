//! Interactive command shell around the player

pub mod command;
pub mod config;
pub mod runner;

pub use command::{Command, ParseError};
pub use config::ShellConfig;
pub use runner::{Flow, Shell};
