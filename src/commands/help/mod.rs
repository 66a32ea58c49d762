// src/commands/help/mod.rs

pub mod command;

pub use command::HelpCommand;
