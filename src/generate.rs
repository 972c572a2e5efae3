// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end generation: parse, build, render each requested target
//!
//! Targets are rendered in fixed order (Go, then Python) and the first
//! failure stops the run. A file written for an earlier target stays on
//! disk; later targets are never attempted.

use crate::assets::Assets;
use crate::builder;
use crate::error::{GenError, Result};
use crate::render;
use crate::table;
use crate::types::{ExitCodeRecord, Target};
use std::path::{Path, PathBuf};

/// Output paths requested on the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub go_output: Option<PathBuf>,
    pub py_output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Output path for `target`. An empty path counts as not requested.
    pub fn output_for(&self, target: Target) -> Option<&Path> {
        let path = match target {
            Target::Go => self.go_output.as_deref(),
            Target::Python => self.py_output.as_deref(),
        };
        path.filter(|p| !p.as_os_str().is_empty())
    }

    /// Requested targets with their paths, in render order
    pub fn requested(&self) -> Vec<(Target, &Path)> {
        Target::all()
            .into_iter()
            .filter_map(|target| self.output_for(target).map(|path| (target, path)))
            .collect()
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub records: Vec<ExitCodeRecord>,
    pub written: Vec<(Target, PathBuf)>,
}

impl GenerateSummary {
    /// 1-based positions of records whose derived Go or Python name is empty
    pub fn empty_names(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.go_name.is_empty() || r.py_name.is_empty())
            .map(|(idx, _)| idx + 1)
            .collect()
    }
}

pub fn run(options: &GenerateOptions, assets: &Assets<'_>) -> Result<GenerateSummary> {
    let targets = options.requested();
    if targets.is_empty() {
        return Err(GenError::NoTargets);
    }

    let rows = table::parse_table(assets.table)?;
    let records = builder::build_records(&rows);

    let mut written = Vec::with_capacity(targets.len());
    for (target, path) in targets {
        render::render_to_file(target, assets.template(target), &records, path)?;
        written.push((target, path.to_path_buf()));
    }

    Ok(GenerateSummary { records, written })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_skips_empty_paths() {
        let options = GenerateOptions {
            go_output: Some(PathBuf::new()),
            py_output: Some(PathBuf::from("out.py")),
        };
        let requested = options.requested();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].0, Target::Python);
    }

    #[test]
    fn test_requested_order_is_go_then_python() {
        let options = GenerateOptions {
            go_output: Some(PathBuf::from("out.go")),
            py_output: Some(PathBuf::from("out.py")),
        };
        let targets: Vec<Target> = options.requested().into_iter().map(|(t, _)| t).collect();
        assert_eq!(targets, vec![Target::Go, Target::Python]);
    }

    #[test]
    fn test_no_targets() {
        let err = run(&GenerateOptions::default(), &Assets::embedded()).unwrap_err();
        assert!(matches!(err, GenError::NoTargets));
    }

    #[test]
    fn test_empty_names_reported_by_position() {
        let record = |go: &str| ExitCodeRecord {
            code: 1,
            go_name: go.to_string(),
            py_name: "X".to_string(),
            description: String::new(),
            group: String::new(),
        };
        let summary = GenerateSummary {
            records: vec![record("A"), record(""), record("C")],
            written: Vec::new(),
        };
        assert_eq!(summary.empty_names(), vec![2]);
    }
}
