// SPDX-License-Identifier: PMPL-1.0-or-later

//! Exit-code table decoding
//!
//! The table is tab-separated with no header row. Each line holds six
//! columns in fixed order:
//!
//! | # | Column           | Notes                          |
//! |---|------------------|--------------------------------|
//! | 1 | code             | signed 32-bit integer          |
//! | 2 | name             | canonical name, required       |
//! | 3 | py name override | empty means derive             |
//! | 4 | go name override | empty means derive             |
//! | 5 | description      | free text                      |
//! | 6 | group            | free text                      |
//!
//! Blank lines are skipped but still counted, so row numbers in errors
//! always match the line number in the file.

use crate::error::{GenError, Result};
use crate::types::InputRow;

pub const COLUMN_COUNT: usize = 6;

const DELIMITER: char = '\t';

/// Decode every row of `source`, preserving file order.
pub fn parse_table(source: &str) -> Result<Vec<InputRow>> {
    let mut rows = Vec::new();

    // `lines` also drops the `\r` of CRLF endings.
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(idx + 1, line)?);
    }

    Ok(rows)
}

/// Decode a single line. `row` is the 1-based line number used in errors.
pub fn parse_row(row: usize, line: &str) -> Result<InputRow> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != COLUMN_COUNT {
        return Err(GenError::parse(
            row,
            format!(
                "expected {} columns, found {}",
                COLUMN_COUNT,
                fields.len()
            ),
        ));
    }

    let code = fields[0].trim().parse::<i32>().map_err(|err| {
        GenError::parse(row, format!("invalid code {:?}: {}", fields[0], err))
    })?;

    if fields[1].is_empty() {
        return Err(GenError::parse(row, "name column is empty"));
    }

    Ok(InputRow {
        code,
        name: fields[1].to_string(),
        py_name_override: fields[2].to_string(),
        go_name_override: fields[3].to_string(),
        description: fields[4].to_string(),
        group: fields[5].to_string(),
    })
}
