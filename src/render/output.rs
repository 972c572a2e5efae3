// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing rendered text to disk

use crate::error::{GenError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Create or truncate `path` and write `text` to it.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}
