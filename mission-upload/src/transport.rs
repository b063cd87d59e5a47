// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Device-bridge transport.
//!
//! Every interaction with the phone is one blocking invocation of the
//! bridge executable. Only the captured stdout is used; the exit status
//! is logged but never checked.

use std::process::Command;

use tracing::debug;

use crate::error::UploadError;

/// Runs one device-bridge command and returns its trimmed stdout.
pub trait Bridge {
    fn run(&self, args: &[&str]) -> Result<String, UploadError>;
}

/// Bridge backed by the `adb` executable.
pub struct AdbBridge {
    program: String,
}

impl AdbBridge {
    /// Create a bridge that invokes `program` for every command.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Bridge for AdbBridge {
    fn run(&self, args: &[&str]) -> Result<String, UploadError> {
        debug!(program = %self.program, ?args, "running bridge command");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| UploadError::io(format!("Failed to run {}", self.program), e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            status = %output.status,
            stderr = %stderr.trim(),
            "bridge command finished"
        );

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
