use thiserror::Error;

use crate::model::ContactId;

#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error("File '{path}' not found.")]
    FileNotFound { path: String },

    #[error("File '{path}' is not a valid JSON file: {reason}")]
    MalformedFile { path: String, reason: String },

    #[error("Failed to read file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save to file '{path}': {source}")]
    SaveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No contacts found matching the given information.")]
    NoMatches,

    #[error("Contact with ID {id} not found.")]
    ContactNotFound { id: ContactId },

    #[error("Invalid input. Please enter valid data.")]
    InvalidInput,
}

pub type PhonebookResult<T> = Result<T, PhonebookError>;
