// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Mission identifier matching.
//!
//! The drone app names every mission folder after a UUID in its canonical
//! 8-4-4-4-12 textual form. Anything else found in the mission root
//! (files, hidden entries, half-written folders) is ignored.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

const MISSION_ID_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MISSION_ID_PATTERN).expect("mission id pattern is valid"))
}

/// Returns true if `s` is exactly a canonical grouped-hex identifier.
///
/// No trimming is done here; surrounding whitespace makes the match fail.
pub fn is_mission_id(s: &str) -> bool {
    pattern().is_match(s)
}

/// A validated mission folder name.
///
/// The original letter case is kept because the remote folder name is
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MissionId(String);

impl MissionId {
    /// Parse an identifier, returning `None` unless it matches exactly.
    pub fn parse(s: &str) -> Option<Self> {
        is_mission_id(s).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// All mission identifiers in a directory listing, in listing order.
///
/// Each line is trimmed before matching.
pub fn mission_ids(listing: &str) -> Vec<MissionId> {
    listing
        .lines()
        .filter_map(|line| MissionId::parse(line.trim()))
        .collect()
}

/// The first mission identifier in a newest-first listing.
///
/// The listing order is trusted as-is; nothing is re-sorted.
pub fn newest_mission(listing: &str) -> Option<MissionId> {
    listing
        .lines()
        .find_map(|line| MissionId::parse(line.trim()))
}
