// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for exit-code generation

use crate::types::Target;
use std::path::PathBuf;
use thiserror::Error;

/// Every fatal condition the generator can hit.
#[derive(Debug, Error)]
pub enum GenError {
    /// Neither output target was requested.
    #[error("at least one of --go or --py must be given")]
    NoTargets,

    /// A table line could not be decoded. `row` is 1-based.
    #[error("row {row}: failed to parse: {reason}")]
    Parse { row: usize, reason: String },

    /// The template text does not compile.
    #[error("failed to parse {target} template")]
    TemplateSyntax {
        target: Target,
        #[source]
        source: minijinja::Error,
    },

    /// The template compiled but failed while rendering, e.g. an unknown field.
    #[error("failed to execute {target} template")]
    TemplateExecution {
        target: Target,
        #[source]
        source: minijinja::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn parse(row: usize, reason: impl Into<String>) -> Self {
        GenError::Parse {
            row,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
