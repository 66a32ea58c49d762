// src/commands/has/command.rs

use crate::commands::command::Command;
use crate::commands::parsing::{usage_error, SharedStore};
use crate::convenience::Localizer;
use crate::core::prelude::*;
use crate::store;

#[derive(Debug)]
pub struct HasCommand {
    store: SharedStore,
}

impl HasCommand {
    pub fn new() -> Self {
        Self::with_store(store::instance())
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for HasCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for HasCommand {
    fn name(&self) -> &'static str {
        "has"
    }

    fn description(&self) -> &'static str {
        "Check whether a key exists"
    }

    fn usage(&self) -> &'static str {
        "<source> <key>"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "has" | "exists")
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let [source, key] = args[..] else {
            return Err(usage_error(self.name(), self.usage()));
        };
        Ok(Localizer::new(self.store, source).has(key).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parsing::leaked_store;

    const PLUGIN: &str = "/srv/plugins/acme/acme.php";

    #[test]
    fn has_reports_bool() {
        let cmd = HasCommand::with_store(leaked_store(PLUGIN));
        assert_eq!(cmd.execute(&[PLUGIN, "greeting"]).expect("ok"), "true");
        assert_eq!(cmd.execute(&[PLUGIN, "nope"]).expect("ok"), "false");
        assert_eq!(cmd.execute(&["/other.php", "greeting"]).expect("ok"), "false");
        assert!(cmd.execute(&[PLUGIN]).is_err());
    }
}
