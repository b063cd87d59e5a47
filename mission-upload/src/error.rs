// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types for the upload pipeline.

use std::io;

use thiserror::Error;

/// Errors that abort an upload run.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No authorized device on the last line of the device list.
    #[error("No adb device connected or USB debugging not allowed!")]
    NoDevice,

    /// The mission root holds no folder named like a mission identifier.
    #[error("No valid mission folders found!")]
    NoMissionFound,

    /// Spawning the bridge or touching a local file failed.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl UploadError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        UploadError::Io {
            context: context.into(),
            source,
        }
    }
}
