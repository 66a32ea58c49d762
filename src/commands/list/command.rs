// src/commands/list/command.rs

use crate::commands::command::Command;
use crate::commands::parsing::{usage_error, SharedStore};
use crate::convenience::Localizer;
use crate::core::prelude::*;
use crate::store;

#[derive(Debug)]
pub struct ListCommand {
    store: SharedStore,
}

impl ListCommand {
    pub fn new() -> Self {
        Self::with_store(store::instance())
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List every entry of a namespace"
    }

    fn usage(&self) -> &'static str {
        "<source>"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "list" | "ls" | "all")
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let [source] = args[..] else {
            return Err(usage_error(self.name(), self.usage()));
        };

        let table = Localizer::new(self.store, source)
            .all()
            .ok_or_else(|| AppError::Validation(format!("Namespace not registered: {}", source)))?;

        Ok(table
            .sorted()
            .into_iter()
            .map(|(key, value)| match value {
                TextValue::Forms(forms) => match &forms.plural {
                    Some(plural) => format!("{} = {} | {}", key, forms.singular, plural),
                    None => format!("{} = {}", key, forms.singular),
                },
                TextValue::Plain(text) => format!("{} = {}", key, text),
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
