// SPDX-License-Identifier: PMPL-1.0-or-later

//! Identifier derivation for generated constants
//!
//! Canonical names look like `EX_DATAERR` or `EXIT_SUCCESS`. The known
//! prefix is stripped, then:
//!
//! - Python keeps the stripped name as-is (`DATAERR`).
//! - Go converts it to upper camel case (`Dataerr`).
//!
//! A non-empty override in the table always wins over derivation.

/// Prefixes removed from canonical names, checked in order.
pub const KNOWN_PREFIXES: &[&str] = &["EX_", "EXIT_"];

/// Names for one exit code in each target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub go_name: String,
    pub py_name: String,
}

/// Remove the first matching entry of [`KNOWN_PREFIXES`], if any.
pub fn strip_known_prefix(name: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

/// Derive both target names, honouring non-empty overrides.
pub fn derive_names(name: &str, py_override: &str, go_override: &str) -> DerivedNames {
    let stripped = strip_known_prefix(name);

    let py_name = if py_override.is_empty() {
        stripped.to_string()
    } else {
        py_override.to_string()
    };

    let go_name = if go_override.is_empty() {
        to_upper_camel(stripped)
    } else {
        go_override.to_string()
    };

    DerivedNames { go_name, py_name }
}

/// Convert a snake/kebab/dotted/spaced name to UpperCamelCase.
///
/// Word boundaries are `_`, `-`, `.`, space and digits. Runs of capitals
/// are folded so `DATA_ERR` becomes `DataErr`; lowercase letters inside a
/// word keep their case. Bytes that are not ASCII letters, digits or
/// separators are dropped.
pub fn to_upper_camel(input: &str) -> String {
    let input = input.trim();
    let mut out = String::with_capacity(input.len());
    let mut cap_next = true;
    let mut prev_is_upper = false;

    for byte in input.bytes() {
        let is_upper = byte.is_ascii_uppercase();
        let is_lower = byte.is_ascii_lowercase();

        let ch = if cap_next {
            byte.to_ascii_uppercase()
        } else if prev_is_upper && is_upper {
            byte.to_ascii_lowercase()
        } else {
            byte
        };
        prev_is_upper = is_upper;

        if is_upper || is_lower {
            out.push(ch as char);
            cap_next = false;
        } else if byte.is_ascii_digit() {
            out.push(ch as char);
            cap_next = true;
        } else {
            cap_next = matches!(byte, b'_' | b'-' | b'.' | b' ');
        }
    }

    out
}
