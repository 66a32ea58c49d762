// src/commands/handler.rs

use super::registry::CommandRegistry;
use crate::core::helpers::preview;

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
}

impl CommandResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            registry: crate::create_default_registry(),
        }
    }

    /// Whitespace-separated input line. Use [`handle_args`](Self::handle_args)
    /// when an argument may itself contain spaces.
    pub fn handle_input(&self, input: &str) -> CommandResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        self.handle_args(&parts)
    }

    pub fn handle_args(&self, parts: &[&str]) -> CommandResult {
        let Some((command, args)) = parts.split_first() else {
            return CommandResult::failed(String::new());
        };

        log::debug!("CommandHandler processing: '{}' ({} args)", command, args.len());

        match self.registry.execute(command, args) {
            Some(Ok(msg)) => {
                log::debug!(
                    "Command returned {} chars: '{}'",
                    msg.chars().count(),
                    preview(&msg, 100)
                );
                CommandResult {
                    message: msg,
                    success: true,
                }
            }
            Some(Err(e)) => {
                log::error!("Command error: {}", e);
                CommandResult::failed(e.to_string())
            }
            None => {
                log::warn!("Unknown command: {}", command);
                CommandResult::failed(format!(
                    "Unknown command: {} (try 'help')",
                    command
                ))
            }
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
