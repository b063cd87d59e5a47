// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Remote storage layout and default locations.
//!
//! The drone app keeps one folder per mission under a fixed root, each
//! holding a single `<id>.kmz` file once populated:
//!
//! ```text
//! /sdcard/Android/data/dji.go.v5/files/waypoint/
//!   <id>/<id>.kmz
//! ```

use crate::mission::MissionId;

// --- Defaults ---

/// Device-bridge executable, resolved through `PATH`.
pub const DEFAULT_BRIDGE: &str = "adb";

/// Local mission file uploaded on every run.
pub const DEFAULT_LOCAL_MISSION: &str = "mission.kmz";

/// Remote root holding one folder per mission.
pub const MISSION_ROOT: &str = "/sdcard/Android/data/dji.go.v5/files/waypoint/";

/// Extension of the mission file inside each folder.
pub const MISSION_EXT: &str = "kmz";

/// Remote folder for a mission: `<root><id>`.
pub fn remote_folder(root: &str, id: &MissionId) -> String {
    if root.ends_with('/') {
        format!("{}{}", root, id)
    } else {
        format!("{}/{}", root, id)
    }
}

/// Remote mission file: `<root><id>/<id>.kmz`.
pub fn remote_file(root: &str, id: &MissionId) -> String {
    format!("{}/{}", remote_folder(root, id), staging_name(id))
}

/// Local staging file name, matching the remote file name.
pub fn staging_name(id: &MissionId) -> String {
    format!("{}.{}", id, MISSION_EXT)
}
