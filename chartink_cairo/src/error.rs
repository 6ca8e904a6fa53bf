// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the cairo backend.

use std::io;

use thiserror::Error;

/// Errors surfaced by the cairo backend.
///
/// Engine failures bubble up unmodified; the backend does not retry, log and
/// swallow, or salvage partial output files.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The cairo engine reported a failure.
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    /// Reading or writing the destination failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl From<cairo::IoError> for RenderError {
    fn from(err: cairo::IoError) -> Self {
        match err {
            cairo::IoError::Cairo(e) => Self::Cairo(e),
            cairo::IoError::Io(e) => Self::Io(e),
        }
    }
}

/// Result alias for backend operations.
pub type RenderResult<T> = Result<T, RenderError>;
