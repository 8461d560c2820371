//! @ai:module:intent Format CLI output for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_generated_report, format_report_types
//! @ai:module:depends_on service, report
//! @ai:module:stateless true

use crate::report::ReportType;
use crate::service::GeneratedReport;
use colored::Colorize;
use std::path::Path;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a generated report summary as a string
/// @ai:post result carries no trailing newline
/// @ai:effects pure
pub fn format_generated_report(
    report: &GeneratedReport,
    saved_to: Option<&Path>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_generated_report_text(report, saved_to),
    }
}

/// @ai:intent Format a generated report summary as human-readable text
/// @ai:effects pure
fn format_generated_report_text(report: &GeneratedReport, saved_to: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} report ({} bytes)\n",
        "OK".green().bold(),
        report.file_type.cyan(),
        report.content.len()
    ));

    match saved_to {
        Some(path) => output.push_str(&format!("  saved to {}", path.display())),
        None => {
            output.push('\n');
            output.push_str(report.content.trim_end_matches('\n'));
        }
    }

    output
}

/// @ai:intent Format the list of supported report types
/// @ai:effects pure
pub fn format_report_types(types: &[ReportType], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(types).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(types).unwrap_or_default(),
        OutputFormat::Text => {
            types
                .iter()
                .map(|report_type| {
                    format!("{} (.{})", report_type.as_str().cyan(), report_type.extension())
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> GeneratedReport {
        GeneratedReport {
            report_type: ReportType::Pdf,
            file_type: "pdf".to_string(),
            content: "Generated PDF Content: Report of 0 items with header and footer".to_string(),
        }
    }

    #[test]
    fn test_json_contains_content_and_type() {
        let json = format_generated_report(&sample(), None, OutputFormat::Json);
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file_type"], "pdf");
        assert_eq!(value["report_type"], "pdf");
        assert!(value["content"].as_str().unwrap().contains("0 items"));
    }

    #[test]
    fn test_text_prints_content_when_not_saved() {
        let text = format_generated_report(&sample(), None, OutputFormat::Text);
        assert!(text.contains("Report of 0 items"));
    }

    #[test]
    fn test_text_prints_path_when_saved() {
        let text = format_generated_report(
            &sample(),
            Some(Path::new("reports/report.pdf")),
            OutputFormat::Text,
        );
        assert!(text.contains("saved to reports/report.pdf"));
        assert!(!text.contains("Report of 0 items"));
    }

    #[test]
    fn test_text_has_no_trailing_newline() {
        let mut report = sample();
        report.content = "Generated CSV Content: id | Name\n1 | A\n".to_string();

        let printed = format_generated_report(&report, None, OutputFormat::Text);
        assert!(printed.ends_with("1 | A"));

        let saved = format_generated_report(&report, Some(Path::new("r.csv")), OutputFormat::Text);
        assert!(!saved.ends_with('\n'));
    }

    #[test]
    fn test_report_types_text_one_per_line() {
        let text = format_report_types(&ReportType::ALL, OutputFormat::Text);
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_report_types_json() {
        let json = format_report_types(&ReportType::ALL, OutputFormat::Json);
        assert_eq!(json, r#"["csv","pdf","json"]"#);
    }
}
