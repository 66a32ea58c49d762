// src/commands/version/mod.rs

pub mod command;

pub use command::VersionCommand;
