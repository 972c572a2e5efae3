// SPDX-License-Identifier: PMPL-1.0-or-later

//! exitcode-gen: generate Go and Python exit-code constants
//!
//! Reads the bundled exit-code table and renders it through the bundled
//! Go and/or Python template, writing each result to the requested path.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use colored::*;
use exitcode_gen::{Assets, GenerateOptions};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exitcode-gen")]
#[command(version)]
#[command(about = "Generate Go and Python exit-code constants")]
#[command(long_about = None)]
#[command(group(
    ArgGroup::new("targets")
        .args(["go", "py"])
        .required(true)
        .multiple(true)
))]
struct Cli {
    /// Go output file
    #[arg(long, value_name = "PATH")]
    go: Option<OsString>,

    /// Python output file
    #[arg(long, value_name = "PATH")]
    py: Option<OsString>,
}

impl From<Cli> for GenerateOptions {
    fn from(cli: Cli) -> Self {
        GenerateOptions {
            go_output: cli.go.map(PathBuf::from),
            py_output: cli.py.map(PathBuf::from),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = GenerateOptions::from(cli);

    let summary = exitcode_gen::run(&options, &Assets::embedded())?;

    for position in summary.empty_names() {
        eprintln!(
            "{} record {} has an empty derived name",
            "warning:".yellow().bold(),
            position
        );
    }

    println!(
        "Generated {} exit codes",
        summary.records.len().to_string().bold()
    );
    for (target, path) in &summary.written {
        println!("  {}: {}", target, path.display().to_string().green());
    }

    Ok(())
}
