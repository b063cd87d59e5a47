// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Waypoint mission upload tool for drone controllers via adb.
//!
//! Copies `mission.kmz` into the most recently created mission folder of
//! the drone app, renamed after that folder.
//!
//! Usage:
//!   mission-upload
//!   RUST_LOG=debug mission-upload

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod staging;
mod transport;

use std::process::ExitCode;

use clap::Parser;

/// Exit status for any failed run.
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    logging::init();

    let args = cli::Cli::parse();
    ExitCode::from(report(cli::run(args)))
}

/// Print the failure banner, if any, and return the process exit status.
fn report(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", error_banner(&e));
            EXIT_FAILURE
        }
    }
}

fn error_banner(err: &anyhow::Error) -> String {
    format!("\n❌ ERROR: {:#}", err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::UploadError;

    #[test]
    fn success_exits_zero() {
        assert_eq!(report(Ok(())), 0);
    }

    #[test]
    fn every_failure_kind_exits_one() {
        let failures = [
            UploadError::NoDevice,
            UploadError::NoMissionFound,
            UploadError::io(
                "Failed to copy mission.kmz to ./x.kmz",
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ),
        ];
        for failure in failures {
            assert_eq!(report(Err(failure.into())), EXIT_FAILURE);
        }
        assert_eq!(EXIT_FAILURE, 1);
    }

    #[test]
    fn banner_carries_message() {
        let banner = error_banner(&UploadError::NoDevice.into());
        assert_eq!(
            banner,
            "\n❌ ERROR: No adb device connected or USB debugging not allowed!"
        );
    }

    #[test]
    fn banner_includes_io_source() {
        let err = UploadError::io(
            "Failed to copy mission.kmz to ./x.kmz",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            error_banner(&err.into()),
            "\n❌ ERROR: Failed to copy mission.kmz to ./x.kmz: No such file or directory"
        );
    }
}
