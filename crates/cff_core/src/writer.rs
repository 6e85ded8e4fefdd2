/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Encoding validated citations back to CFF.
//!
//! Output uses the same kebab-case keys the reader accepts. Absent optional
//! values and empty lists are left out, so writing and reading a citation
//! gives back an equal record.

use crate::citation::Citation;

pub fn to_yaml_string(citation: &Citation) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(citation)
}

pub fn to_json_string(citation: &Citation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(citation)
}
