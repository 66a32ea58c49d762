// src/commands/mod.rs

pub mod command;
pub mod get;
pub mod handler;
pub mod has;
pub mod help;
pub mod id;
pub mod list;
pub mod parsing;
pub mod registry;
pub mod version;

pub use command::Command;
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
