// src/core/prelude.rs

// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// Store essentials
pub use crate::store::{EntryTable, LocalizationStore, NamespaceId, TextValue};

// Standard library essentials
pub use std::io::{self, Write};
pub use std::sync::RwLock;
