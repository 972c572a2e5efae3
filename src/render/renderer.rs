// SPDX-License-Identifier: PMPL-1.0-or-later

//! Template compilation and execution
//!
//! Templates use Jinja syntax. The context has a single variable,
//! `exit_codes`, holding every record in table order:
//!
//! ```text
//! {% for ec in exit_codes %}
//! {{ ec.goName }} = {{ ec.code }}
//! {% endfor %}
//! ```
//!
//! Undefined lookups are errors, so a misspelled field fails the render
//! instead of silently producing an empty string.

use crate::error::{GenError, Result};
use crate::types::{ExitCodeRecord, Target};
use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};

pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        target: Target,
        template: &str,
        records: &[ExitCodeRecord],
    ) -> Result<String> {
        let env = self.environment();
        let tmpl = env
            .template_from_named_str(target.template_name(), template)
            .map_err(|source| GenError::TemplateSyntax { target, source })?;

        tmpl.render(context! { exit_codes => records })
            .map_err(|source| GenError::TemplateExecution { target, source })
    }

    fn environment<'source>(&self) -> Environment<'source> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage() -> ExitCodeRecord {
        ExitCodeRecord {
            code: 64,
            go_name: "Usage".to_string(),
            py_name: "USAGE".to_string(),
            description: "bad usage".to_string(),
            group: "cmdline".to_string(),
        }
    }

    #[test]
    fn test_renders_fields() {
        let out = TemplateRenderer::new()
            .render(
                Target::Go,
                "{% for ec in exit_codes %}{{ ec.code }} {{ ec.goName }} {{ ec.pyName }} {{ ec.group }}: {{ ec.description }}{% endfor %}",
                &[usage()],
            )
            .unwrap();
        assert_eq!(out, "64 Usage USAGE cmdline: bad usage");
    }

    #[test]
    fn test_block_lines_are_trimmed() {
        let template = "const (\n{% for ec in exit_codes %}\n\t{{ ec.goName }} = {{ ec.code }}\n{% endfor %}\n)\n";
        let mut second = usage();
        second.code = 65;
        second.go_name = "DataErr".to_string();

        let out = TemplateRenderer::new()
            .render(Target::Go, template, &[usage(), second])
            .unwrap();
        assert_eq!(out, "const (\n\tUsage = 64\n\tDataErr = 65\n)\n");
    }

    #[test]
    fn test_no_html_escaping() {
        let mut record = usage();
        record.description = "a <b> & \"c\"".to_string();
        let out = TemplateRenderer::new()
            .render(
                Target::Python,
                "{% for ec in exit_codes %}{{ ec.description }}{% endfor %}",
                &[record],
            )
            .unwrap();
        assert_eq!(out, "a <b> & \"c\"");
    }

    #[test]
    fn test_syntax_error() {
        let err = TemplateRenderer::new()
            .render(Target::Go, "{% for ec in exit_codes %}{{ ec.code }", &[usage()])
            .unwrap_err();
        assert!(matches!(err, GenError::TemplateSyntax { target: Target::Go, .. }));
    }

    #[test]
    fn test_unknown_field_is_execution_error() {
        let err = TemplateRenderer::new()
            .render(
                Target::Python,
                "{% for ec in exit_codes %}{{ ec.rustName }}{% endfor %}",
                &[usage()],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            GenError::TemplateExecution {
                target: Target::Python,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_record_list() {
        let out = TemplateRenderer::new()
            .render(Target::Go, "start\n{% for ec in exit_codes %}\nx\n{% endfor %}\nend\n", &[])
            .unwrap();
        assert_eq!(out, "start\nend\n");
    }
}
