// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::config::UploadConfig;
use crate::transport::AdbBridge;

/// Command-line arguments.
///
/// There are no options beyond `--help` and `--version`; running the
/// binary performs the whole upload.
#[derive(Parser)]
#[command(name = "mission-upload", version)]
#[command(about = "Upload mission.kmz into the newest waypoint mission folder on the connected device")]
pub struct Cli {}

/// Execute the upload pipeline with the built-in configuration.
pub fn run(_cli: Cli) -> Result<()> {
    let config = UploadConfig::default();
    let bridge = AdbBridge::new(&config.bridge);

    commands::run_pipeline(&bridge, &config)?;
    Ok(())
}
