//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, PathReport, RelationReport};

/// Width of the label column in human output.
const LABEL_WIDTH: usize = 13;

fn line(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value}")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_path(&self, report: &PathReport) -> Result<String> {
        if report.bad {
            return Ok("(bad path)".to_string());
        }

        let mut lines = vec![
            line("path:", &report.path),
            line(
                "protocol:",
                &format!("{} ({})", report.protocol, report.protocol_hash),
            ),
        ];
        if let Some(ref drive) = report.drive {
            lines.push(line("drive:", drive));
        }
        lines.push(line("absolute:", yes_no(report.absolute)));
        lines.push(line("directories:", &report.directories.join(", ")));
        if !report.filename.is_empty() {
            lines.push(line("filename:", &report.filename));
            lines.push(line("stem:", &report.filename_only));
            lines.push(line("extension:", &report.extension));
        }
        if !report.portion.is_empty() {
            lines.push(line("portion:", &report.portion));
        }
        lines.push(line("os string:", &report.os_string));

        Ok(lines.join("\n"))
    }

    fn format_relation(&self, report: &RelationReport) -> Result<String> {
        Ok(report.description.clone())
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(Error::from)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_path(&self, report: &PathReport) -> Result<String> {
        Self::to_json(report)
    }

    fn format_relation(&self, report: &RelationReport) -> Result<String> {
        Self::to_json(report)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl YamlFormatter {
    fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
        let yaml = serde_yaml::to_string(value)?;
        Ok(yaml.trim_end().to_string())
    }
}

impl OutputFormatter for YamlFormatter {
    fn format_path(&self, report: &PathReport) -> Result<String> {
        Self::to_yaml(report)
    }

    fn format_relation(&self, report: &RelationReport) -> Result<String> {
        Self::to_yaml(report)
    }
}
