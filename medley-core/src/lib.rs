//! Medley Core - content model and catalog for the Medley demo library
//!
//! This crate provides the building blocks for the Medley console
//! catalog: the polymorphic content model, the ordered catalog, the
//! interactive menu engine, and configuration management.

pub mod catalog;
pub mod config;
pub mod content;
pub mod menu;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{Catalog, CatalogError};
pub use config::MedleyConfig;
pub use content::{Content, ContentInfo, ContentKind, Movie, Song};

/// Core errors that can bubble up from any Medley subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MedleyError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MedleyError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MedleyError::Catalog(CatalogError::SelectionOutOfRange {
                selected,
                available,
            }) => {
                format!("Selection {selected} is not in the catalog (valid choices: 1-{available})")
            }
            MedleyError::Configuration { .. } => "Configuration error occurred".to_string(),
            MedleyError::Io(_) => "Console I/O error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MedleyError::Catalog(_))
    }
}

pub type Result<T> = std::result::Result<T, MedleyError>;
