// src/commands/has/mod.rs

pub mod command;

pub use command::HasCommand;
