use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph built (warnings, if any, are advisory)
    Success = 0,
    /// Dangling dependencies were found and strict mode was requested
    DanglingDependenciesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, duplicate path, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DanglingDependenciesDetected => {
                write!(f, "Dangling Dependencies Detected (1)")
            }
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building a package graph.
///
/// `Validation` and `DuplicatePath` come from the core and abort the build.
/// The remaining variants are produced by the adapters and the application layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A raw descriptor is missing a required field or has the wrong shape
    #[error("Invalid package descriptor at index {index}: {reason}")]
    Validation { index: usize, reason: String },

    /// Two raw descriptors share an identity path
    #[error("Duplicate package path '{path}' at indices {first_index} and {second_index}")]
    DuplicatePath {
        path: String,
        first_index: usize,
        second_index: usize,
    },

    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON array of packages or an object with a \"packages\" array")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular inventory file, or '-' for stdin")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("{count} dangling dependency reference(s) found in strict mode")]
    DanglingDependencies { count: usize },
}

impl GraphError {
    /// Index of the offending input record, when the error concerns one
    pub fn record_index(&self) -> Option<usize> {
        match self {
            GraphError::Validation { index, .. } => Some(*index),
            GraphError::DuplicatePath { second_index, .. } => Some(*second_index),
            _ => None,
        }
    }
}
