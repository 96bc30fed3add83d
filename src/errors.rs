/*!
 * Error types for the scenebreak application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while running the breakdown pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error when a document contains no processable text
    #[error("Document is empty: {source_id}")]
    EmptyDocument {
        /// Identifier of the offending document
        source_id: String,
    },

    /// Error from the entity tagger backend
    #[error("Entity tagging failed: {0}")]
    TaggingFailed(String),
}

/// Errors that can occur when writing projected tables
#[derive(Error, Debug)]
pub enum OutputError {
    /// Error when the requested output format is not recognized
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Error serializing a breakdown to JSON
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the breakdown pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Error producing output
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
