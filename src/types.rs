// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for exitcode-gen
//!
//! An [`InputRow`] is one decoded line of the exit-code table; an
//! [`ExitCodeRecord`] is the normalized form handed to the templates.

use serde::Serialize;
use std::fmt;

/// One line of the exit-code table, as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// Process exit status value
    pub code: i32,
    /// Canonical symbolic name, e.g. `EX_USAGE`
    pub name: String,
    /// Python name to use instead of the derived one (empty = derive)
    pub py_name_override: String,
    /// Go name to use instead of the derived one (empty = derive)
    pub go_name_override: String,
    pub description: String,
    pub group: String,
}

/// Normalized exit code, one per input row.
///
/// Serialized field names are the ones templates refer to:
/// `code`, `goName`, `pyName`, `description`, `group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitCodeRecord {
    pub code: i32,
    #[serde(rename = "goName")]
    pub go_name: String,
    #[serde(rename = "pyName")]
    pub py_name: String,
    pub description: String,
    pub group: String,
}

/// Output languages with a bundled template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Go,
    Python,
}

impl Target {
    /// Render order used by the orchestrator
    pub fn all() -> Vec<Target> {
        vec![Target::Go, Target::Python]
    }

    /// Template name reported in diagnostics
    pub fn template_name(&self) -> &'static str {
        match self {
            Target::Go => "golang.tmpl",
            Target::Python => "python.tmpl",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Go => write!(f, "Go"),
            Target::Python => write!(f, "Python"),
        }
    }
}
