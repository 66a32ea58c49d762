// src/commands/version/command.rs
use crate::commands::command::Command;
use crate::core::constants::{APP_NAME, VERSION};
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Show application version"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "version" | "ver" | "--version" | "-v")
    }

    fn execute(&self, _args: &[&str]) -> Result<String> {
        Ok(format!("{} {}", APP_NAME, VERSION))
    }

    fn priority(&self) -> u8 {
        40
    }
}
