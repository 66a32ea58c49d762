use crate::core::prelude::*;

pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Argument synopsis shown by `help`.
    fn usage(&self) -> &'static str {
        ""
    }

    fn matches(&self, command: &str) -> bool;
    fn execute(&self, args: &[&str]) -> Result<String>;

    fn priority(&self) -> u8 {
        50
    }
    fn is_available(&self) -> bool {
        true
    }
}
