// src/commands/help/command.rs
use crate::commands::command::Command;
use crate::core::constants::APP_NAME;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands"
    }

    fn usage(&self) -> &'static str {
        "[command]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "help" | "?" | "--help" | "-h")
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let registry = crate::create_default_registry();

        if let Some(&name) = args.first() {
            let cmd = registry
                .find_command(name)
                .ok_or_else(|| AppError::Validation(format!("Unknown command: {}", name)))?;
            return Ok(format!(
                "{} {}\n  {}",
                cmd.name(),
                cmd.usage(),
                cmd.description()
            ));
        }

        let commands = registry.list_commands();
        let width = commands
            .iter()
            .map(|(name, usage, _)| name.len() + usage.len() + 1)
            .max()
            .unwrap_or(0);

        let mut out = format!(
            "Usage: {} [--config PATH] <command> [args...]\n\nCommands:\n",
            APP_NAME
        );
        for (name, usage, description) in commands {
            let synopsis = format!("{} {}", name, usage);
            out.push_str(&format!("  {:<width$}  {}\n", synopsis, description, width = width));
        }
        Ok(out.trim_end().to_string())
    }

    fn priority(&self) -> u8 {
        95
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let out = HelpCommand.execute(&[]).expect("help");
        for name in ["get", "has", "list", "id", "version", "help"] {
            assert!(out.contains(name), "missing {name} in:\n{out}");
        }
    }

    #[test]
    fn single_command_help() {
        let out = HelpCommand.execute(&["ls"]).expect("alias resolves");
        assert!(out.starts_with("list <source>"));
        assert!(HelpCommand.execute(&["bogus"]).is_err());
    }
}
