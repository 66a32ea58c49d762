// src/commands/list/mod.rs

pub mod command;

pub use command::ListCommand;
