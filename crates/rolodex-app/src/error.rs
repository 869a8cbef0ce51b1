// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("{reason}")]
    Fetch { reason: String },

    #[error("employee record {index} is missing required field `{field}`")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("employee index {index} is out of range for a directory of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

impl DirectoryError {
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch {
            reason: reason.into(),
        }
    }

    /// Text shown in the page header when loading the directory fails.
    pub fn user_message(&self) -> String {
        format!("Oops! Something went wrong: {self}")
    }
}
