// src/commands/id/mod.rs

pub mod command;

pub use command::IdCommand;
