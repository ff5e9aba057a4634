// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
//
// This file defines the error type shared by the search library. Argument
// problems are recoverable (usage text, exit 1); hash primitive failures are
// fatal for the instance.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Hash primitive failure: unsupported output size {bits} bits")]
    HashPrimitive { bits: usize },

    #[error("Search worker {worker} panicked")]
    WorkerPanic { worker: u32 },
}

impl SearchError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SearchError::InvalidArgument {
            message: message.into(),
        }
    }

    /// True for errors the binary reports with usage text instead of aborting
    pub fn is_usage_error(&self) -> bool {
        matches!(self, SearchError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
