// src/core/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A write targeted a namespace that was never registered.
    #[error("Namespace not registered: {namespace}")]
    NotRegistered { namespace: String },

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn not_registered(namespace: impl Into<String>) -> Self {
        AppError::NotRegistered {
            namespace: namespace.into(),
        }
    }

    pub fn is_not_registered(&self) -> bool {
        matches!(self, AppError::NotRegistered { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
