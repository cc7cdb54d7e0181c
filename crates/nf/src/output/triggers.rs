//! Trigger file summary formatting for `nf check`.

use std::path::Path;

use newsfilter_core::trigger::{TriggerConfig, TriggerErrorKind};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{describe_trigger, format_kind, truncate_str};

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub path: String,
    pub valid: bool,
    pub triggers: Vec<TriggerOutput<'a>>,
    pub active: Vec<&'a str>,
    pub diagnostics: Vec<DiagnosticOutput<'a>>,
}

/// JSON output structure for one named trigger.
#[derive(Serialize)]
pub struct TriggerOutput<'a> {
    pub name: &'a str,
    pub kind: &'static str,
    pub description: String,
}

/// JSON output structure for one rejected line.
#[derive(Serialize)]
pub struct DiagnosticOutput<'a> {
    pub line: usize,
    pub text: &'a str,
    pub kind: &'static str,
    pub message: String,
}

fn error_kind_label(kind: TriggerErrorKind) -> &'static str {
    match kind {
        TriggerErrorKind::Syntax => "syntax",
        TriggerErrorKind::Reference => "reference",
        TriggerErrorKind::TimeParse => "time",
        TriggerErrorKind::Fatal => "fatal",
    }
}

/// Formats a trigger file summary as JSON.
pub fn format_check_json(path: &Path, config: &TriggerConfig) -> Result<String, serde_json::Error> {
    let triggers = config
        .names()
        .filter_map(|(name, id)| {
            config.graph().get(id).map(|trigger| TriggerOutput {
                name,
                kind: trigger.kind().keyword(),
                description: describe_trigger(config, trigger),
            })
        })
        .collect();

    let diagnostics = config
        .diagnostics()
        .iter()
        .map(|d| DiagnosticOutput {
            line: d.line,
            text: &d.text,
            kind: error_kind_label(d.error.kind()),
            message: d.error.to_string(),
        })
        .collect();

    let output = CheckOutput {
        path: path.display().to_string(),
        valid: config.diagnostics().is_empty(),
        triggers,
        active: config.active().iter().map(|t| t.name()).collect(),
        diagnostics,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a trigger file summary as a table.
pub fn format_check_table(path: &Path, config: &TriggerConfig, use_colors: bool) -> String {
    let mut output = String::new();

    let title = format!("Triggers in {}", path.display());
    if use_colors {
        output.push_str(&format!("{}\n\n", title.green().bold()));
    } else {
        output.push_str(&format!("{title}\n\n"));
    }

    if config.graph().is_empty() {
        output.push_str("No triggers defined.\n");
    } else {
        let header = format!("{:<16} {:<20} {}", "Name", "Kind", "Definition");
        if use_colors {
            output.push_str(&format!("{}\n", header.dimmed()));
        } else {
            output.push_str(&header);
            output.push('\n');
        }

        for (name, id) in config.names() {
            let Some(trigger) = config.graph().get(id) else {
                continue;
            };
            let kind = format_kind(trigger.kind(), use_colors);
            // Pad on the plain keyword so colored output stays aligned.
            let pad = 20usize.saturating_sub(trigger.kind().keyword().len());
            output.push_str(&format!(
                "{:<16} {}{} {}\n",
                truncate_str(name, 16),
                kind,
                " ".repeat(pad),
                truncate_str(&describe_trigger(config, trigger), 50)
            ));
        }
    }

    output.push('\n');
    if config.active().is_empty() {
        output.push_str("Active: (none)\n");
    } else {
        let names: Vec<&str> = config.active().iter().map(|t| t.name()).collect();
        output.push_str(&format!("Active: {}\n", names.join(", ")));
    }

    if !config.diagnostics().is_empty() {
        let heading = format!("\n{} rejected line(s):", config.diagnostics().len());
        if use_colors {
            output.push_str(&format!("{}\n", heading.red().bold()));
        } else {
            output.push_str(&heading);
            output.push('\n');
        }

        for d in config.diagnostics() {
            let location = format!("  line {}:", d.line);
            if use_colors {
                output.push_str(&format!("{} {}\n", location.yellow(), d.error));
            } else {
                output.push_str(&format!("{} {}\n", location, d.error));
            }
            output.push_str(&format!("    {}\n", d.text));
        }
    }

    output
}
