// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload pipeline: device check, mission lookup, mission upload.

use mission_common::device::last_line_has_device;
use mission_common::layout::{remote_file, staging_name};
use mission_common::mission::{newest_mission, MissionId};
use tracing::debug;

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::staging::StagingFile;
use crate::transport::Bridge;

/// Verify that an authorized device is attached.
pub fn check_device(bridge: &dyn Bridge) -> Result<(), UploadError> {
    println!("→ Checking adb connection...");
    let out = bridge.run(&["devices"])?;
    println!("{}", out);

    if !last_line_has_device(&out) {
        return Err(UploadError::NoDevice);
    }

    Ok(())
}

/// Find the most recently created mission folder.
///
/// Relies on `ls -t` on the device for ordering.
pub fn latest_mission(bridge: &dyn Bridge, config: &UploadConfig) -> Result<MissionId, UploadError> {
    println!("→ Determining latest mission UUID...");
    let out = bridge.run(&["shell", "ls", "-t", config.mission_root.as_str()])?;

    let id = newest_mission(&out).ok_or(UploadError::NoMissionFound)?;
    println!("✔ Newest UUID: {}", id);

    Ok(id)
}

/// Replace the mission file inside the folder for `id`.
pub fn upload_mission(
    bridge: &dyn Bridge,
    config: &UploadConfig,
    id: &MissionId,
) -> Result<(), UploadError> {
    let remote = remote_file(&config.mission_root, id);
    println!("→ Remote target: {}", remote);

    let staged = StagingFile::create(
        &config.local_mission,
        config.staging_dir.join(staging_name(id)),
    )?;

    println!("→ Deleting old KMZ file if present...");
    if let Err(e) = bridge.run(&["shell", "rm", remote.as_str()]) {
        debug!(error = %e, "ignoring failed remote delete");
    }

    println!("→ Uploading new KMZ file...");
    let local = staged.path().to_string_lossy().into_owned();
    let out = bridge.run(&["push", local.as_str(), remote.as_str()])?;
    println!("{}", out);

    println!("→ Cleaning up temporary file...");
    staged.remove()?;

    println!("✓ Upload finished!");
    println!("→ DJI Fly will automatically synchronise the mission.");

    Ok(())
}

/// Run the whole upload: check, locate, upload.
pub fn run_pipeline(bridge: &dyn Bridge, config: &UploadConfig) -> Result<(), UploadError> {
    check_device(bridge)?;
    let id = latest_mission(bridge, config)?;
    upload_mission(bridge, config, &id)?;

    println!("✓ Finished!");
    Ok(())
}
