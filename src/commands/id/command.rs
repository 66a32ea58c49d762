// src/commands/id/command.rs

use crate::commands::command::Command;
use crate::commands::parsing::usage_error;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct IdCommand;

impl Command for IdCommand {
    fn name(&self) -> &'static str {
        "id"
    }

    fn description(&self) -> &'static str {
        "Print the namespace id derived from a source"
    }

    fn usage(&self) -> &'static str {
        "<source>"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "id" | "hash")
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let [source] = args[..] else {
            return Err(usage_error(self.name(), self.usage()));
        };
        Ok(NamespaceId::derive(source).to_string())
    }
}
