use super::command::Command;
use crate::core::prelude::*;
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    name_map: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            name_map: HashMap::new(),
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        let name = command.name().to_lowercase();
        let index = self.commands.len();

        self.commands.push(Box::new(command));
        self.name_map.insert(name, index);
        self
    }

    pub fn find_command(&self, input: &str) -> Option<&dyn Command> {
        let input = input.trim().to_lowercase();

        // Exact name
        if let Some(&index) = self.name_map.get(&input) {
            return self.commands.get(index).map(|cmd| cmd.as_ref());
        }

        // Aliases, highest priority first
        let mut candidates: Vec<&dyn Command> = self
            .commands
            .iter()
            .map(|cmd| cmd.as_ref())
            .filter(|cmd| cmd.is_available() && cmd.matches(&input))
            .collect();
        candidates.sort_by_key(|cmd| std::cmp::Reverse(cmd.priority()));
        candidates.into_iter().next()
    }

    pub fn execute(&self, command: &str, args: &[&str]) -> Option<Result<String>> {
        self.find_command(command).map(|cmd| cmd.execute(args))
    }

    /// `(name, usage, description)` sorted by name.
    pub fn list_commands(&self) -> Vec<(&str, &str, &str)> {
        let mut list: Vec<_> = self
            .commands
            .iter()
            .filter(|cmd| cmd.is_available())
            .map(|cmd| (cmd.name(), cmd.usage(), cmd.description()))
            .collect();
        list.sort_by(|a, b| a.0.cmp(b.0));
        list
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
