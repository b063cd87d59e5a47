// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload configuration.

use std::path::PathBuf;

use mission_common::layout::{DEFAULT_BRIDGE, DEFAULT_LOCAL_MISSION, MISSION_ROOT};

/// Locations used by one upload run.
///
/// Built from the compile-time defaults; nothing is read from the
/// environment or the command line.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Device-bridge executable.
    pub bridge: String,
    /// Local mission file to upload.
    pub local_mission: PathBuf,
    /// Remote root holding one folder per mission.
    pub mission_root: String,
    /// Directory for the renamed staging copy.
    pub staging_dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bridge: DEFAULT_BRIDGE.to_string(),
            local_mission: PathBuf::from(DEFAULT_LOCAL_MISSION),
            mission_root: MISSION_ROOT.to_string(),
            staging_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout() {
        let config = UploadConfig::default();
        assert_eq!(config.bridge, "adb");
        assert_eq!(config.local_mission, PathBuf::from("mission.kmz"));
        assert_eq!(
            config.mission_root,
            "/sdcard/Android/data/dji.go.v5/files/waypoint/"
        );
        assert_eq!(config.staging_dir, PathBuf::from("."));
    }
}
