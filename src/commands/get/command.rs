// src/commands/get/command.rs

use crate::commands::command::Command;
use crate::commands::parsing::{split_flags, usage_error, SharedStore};
use crate::convenience::Localizer;
use crate::core::prelude::*;
use crate::store;

#[derive(Debug)]
pub struct GetCommand {
    store: SharedStore,
}

impl GetCommand {
    pub fn new() -> Self {
        Self::with_store(store::instance())
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for GetCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn description(&self) -> &'static str {
        "Print the text stored under a key"
    }

    fn usage(&self) -> &'static str {
        "<source> <key> [--plural] [--lower]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "get" | "text")
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let (positional, flags) = split_flags(args);
        let [source, key] = positional[..] else {
            return Err(usage_error(self.name(), self.usage()));
        };

        let mut plural = false;
        let mut lowercase = false;
        for flag in flags {
            match flag {
                "--plural" => plural = true,
                "--lower" => lowercase = true,
                other => {
                    return Err(AppError::Validation(format!("Unknown flag: {}", other)));
                }
            }
        }

        Localizer::new(self.store, source)
            .get(key, plural, lowercase)
            .ok_or_else(|| AppError::Validation(format!("No entry '{}' for {}", key, source)))
    }
}
