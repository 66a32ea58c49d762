// src/commands/get/mod.rs

pub mod command;

pub use command::GetCommand;
