//! Error types for the library layer.

/// Errors produced by the library layer. Shaping itself never fails; these
/// cover input validation ahead of it and lookups around it.
#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A requested entity does not exist.
    #[error("{entity} with id {id} doesn't exist")]
    NotFound { entity: &'static str, id: String },
    /// Reading the dataset failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
