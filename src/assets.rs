// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundled exit-code table and templates
//!
//! The files under `assets/` are compiled into the binary. They are handed
//! to [`crate::generate::run`] as an [`Assets`] value so tests can swap in
//! their own table or templates.

use crate::types::Target;

const EXIT_CODES_TSV: &str = include_str!("../assets/exitcodes.tsv");
const GO_TEMPLATE: &str = include_str!("../assets/golang.tmpl");
const PYTHON_TEMPLATE: &str = include_str!("../assets/python.tmpl");

/// Input table plus one template per target
#[derive(Debug, Clone, Copy)]
pub struct Assets<'a> {
    pub table: &'a str,
    pub go_template: &'a str,
    pub python_template: &'a str,
}

impl Assets<'static> {
    /// The assets compiled into this binary
    pub fn embedded() -> Self {
        Self {
            table: EXIT_CODES_TSV,
            go_template: GO_TEMPLATE,
            python_template: PYTHON_TEMPLATE,
        }
    }
}

impl<'a> Assets<'a> {
    pub fn template(&self, target: Target) -> &'a str {
        match target {
            Target::Go => self.go_template,
            Target::Python => self.python_template,
        }
    }
}
