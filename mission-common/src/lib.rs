// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and utilities for mission-upload.
//!
//! Everything here is pure text handling with no process or filesystem
//! access, so the host tool can be tested against canned bridge output:
//! - `mission`: mission identifier matching and newest-folder selection
//! - `device`: parsing of the bridge's device list
//! - `layout`: remote storage layout and default locations

pub mod device;
pub mod layout;
pub mod mission;

// Re-export commonly used types
pub use device::{last_line_has_device, parse_device_line, DeviceState};
pub use layout::{remote_file, remote_folder, staging_name};
pub use layout::{DEFAULT_BRIDGE, DEFAULT_LOCAL_MISSION, MISSION_EXT, MISSION_ROOT};
pub use mission::{is_mission_id, mission_ids, newest_mission, MissionId};
