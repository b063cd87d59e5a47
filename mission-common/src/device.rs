// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Parsing of the bridge's `devices` output.
//!
//! The output is a header line followed by one `serial<TAB>state` row per
//! attached device:
//!
//! ```text
//! List of devices attached
//! 1234ABCD	device
//! ```

/// Connection state reported for one device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceState {
    /// Authorized and responsive.
    Device,
    /// USB debugging not yet allowed on the phone.
    Unauthorized,
    Offline,
    /// Any other state, e.g. `no permissions`, `recovery`, `sideload`.
    Other(String),
}

impl DeviceState {
    /// Classify the state column of a device row.
    ///
    /// Only the leading token is significant; long-format rows carry
    /// `key:value` pairs after it.
    pub fn from_state(state: &str) -> Self {
        match state.split_whitespace().next() {
            Some("device") => DeviceState::Device,
            Some("unauthorized") => DeviceState::Unauthorized,
            Some("offline") => DeviceState::Offline,
            _ => DeviceState::Other(state.trim().to_string()),
        }
    }
}

/// Parse a single device row into its serial and state.
///
/// Returns `None` for the header, blank lines, or rows without a state.
pub fn parse_device_line(line: &str) -> Option<(&str, DeviceState)> {
    let line = line.trim();
    if line.starts_with("List of devices") {
        return None;
    }

    let mut fields = line.splitn(2, |c: char| c.is_whitespace());
    let serial = fields.next().filter(|s| !s.is_empty())?;
    let state = fields.next()?.trim();
    if state.is_empty() {
        return None;
    }

    Some((serial, DeviceState::from_state(state)))
}

/// True when the last line of `output` reports an authorized device.
///
/// Only the last line is inspected; with several devices attached the
/// earlier rows are ignored.
pub fn last_line_has_device(output: &str) -> bool {
    output
        .trim()
        .lines()
        .last()
        .and_then(parse_device_line)
        .is_some_and(|(_, state)| state == DeviceState::Device)
}
