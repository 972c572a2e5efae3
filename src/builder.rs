// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record assembly: one [`ExitCodeRecord`] per [`InputRow`], in input order

use crate::naming;
use crate::types::{ExitCodeRecord, InputRow};

pub struct RecordBuilder;

impl RecordBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, rows: &[InputRow]) -> Vec<ExitCodeRecord> {
        rows.iter().map(|row| self.build_one(row)).collect()
    }

    fn build_one(&self, row: &InputRow) -> ExitCodeRecord {
        let names = naming::derive_names(&row.name, &row.py_name_override, &row.go_name_override);

        ExitCodeRecord {
            code: row.code,
            go_name: names.go_name,
            py_name: names.py_name,
            description: row.description.clone(),
            group: row.group.clone(),
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build records for every row
pub fn build_records(rows: &[InputRow]) -> Vec<ExitCodeRecord> {
    RecordBuilder::new().build(rows)
}
