//! Process-wide registry of already translated plugin strings.
//!
//! Each plugin registers a namespace under a stable source string
//! (conventionally its main file path), adds texts to it, and reads them
//! back by key with optional plural and lowercase variants.

#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod commands;
pub mod convenience;
pub mod core;
pub mod store;

// Essential re-exports
pub use commands::{Command, CommandHandler, CommandRegistry};
pub use convenience::Localizer;
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use store::{EntryTable, LocalizationStore, NamespaceId, TextForms, TextValue};

pub fn create_default_registry() -> CommandRegistry {
    use commands::{
        get::GetCommand, has::HasCommand, help::HelpCommand, id::IdCommand, list::ListCommand,
        version::VersionCommand,
    };

    let mut registry = CommandRegistry::new();

    registry.register(GetCommand::new());
    registry.register(HasCommand::new());
    registry.register(ListCommand::new());
    registry.register(IdCommand);
    registry.register(VersionCommand);
    registry.register(HelpCommand);

    registry
}
