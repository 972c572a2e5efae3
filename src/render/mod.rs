// SPDX-License-Identifier: PMPL-1.0-or-later

//! Template rendering and output

pub mod output;
pub mod renderer;

use crate::error::Result;
use crate::types::{ExitCodeRecord, Target};
use std::path::Path;

pub use output::write_output;
pub use renderer::TemplateRenderer;

/// Render `template` for `target` over the full record list
pub fn render(target: Target, template: &str, records: &[ExitCodeRecord]) -> Result<String> {
    let renderer = TemplateRenderer::new();
    renderer.render(target, template, records)
}

/// Render and write to `path`. Nothing is written unless rendering succeeds.
pub fn render_to_file<P: AsRef<Path>>(
    target: Target,
    template: &str,
    records: &[ExitCodeRecord],
    path: P,
) -> Result<()> {
    let text = render(target, template, records)?;
    write_output(path, &text)
}
