//! @ai:module:intent Orchestrate factory lookup and report generation
//! @ai:module:layer application
//! @ai:module:public_api ReportService, GeneratedReport
//! @ai:module:depends_on report, record, error

use crate::error::{Error, Result};
use crate::record::Record;
use crate::report::{ReportFactory, ReportType};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// @ai:intent Generated body together with its file type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReport {
    pub report_type: ReportType,
    pub file_type: String,
    pub content: String,
}

impl GeneratedReport {
    /// @ai:intent Build the download file name for this report
    /// @ai:example ("report") -> "report.csv"
    /// @ai:effects pure
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.report_type.extension())
    }

    /// @ai:intent Write the report body into a directory
    /// @ai:post returned path exists and holds content
    /// @ai:effects fs:write
    pub fn save(&self, output_dir: &Path, stem: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir).map_err(|source| Error::FileWrite {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(self.file_name(stem));
        std::fs::write(&path, &self.content).map_err(|source| Error::FileWrite {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Report saved to {}", path.display());
        Ok(path)
    }
}

/// @ai:intent Generates reports through an injected factory
pub struct ReportService {
    factory: ReportFactory,
}

impl ReportService {
    /// @ai:intent Create a service around a factory
    /// @ai:effects pure
    pub fn new(factory: ReportFactory) -> Self {
        Self { factory }
    }

    /// @ai:intent Generate a report of the requested type
    /// @ai:pre report_type is one of csv, pdf, json in any case
    /// @ai:post file_type equals the lower-cased report_type
    /// @ai:effects pure
    pub fn generate_report(&self, report_type: &str, records: &[Record]) -> Result<GeneratedReport> {
        let generator = self.factory.create_report(report_type)?;

        tracing::debug!(
            "Generating {} report from {} records",
            generator.file_type(),
            records.len()
        );

        let content = generator.generate(records)?;

        Ok(GeneratedReport {
            report_type: generator.report_type(),
            file_type: generator.file_type().to_string(),
            content,
        })
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(ReportFactory::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![Record::new(1, "A"), Record::new(2, "B")]
    }

    #[test]
    fn test_generate_csv_returns_content_and_type() {
        let service = ReportService::new(ReportFactory::new());
        let report = service.generate_report("csv", &records()).unwrap();

        assert_eq!(report.file_type, "csv");
        assert_eq!(report.report_type, ReportType::Csv);
        assert_eq!(
            report.content,
            "Generated CSV Content: id | Name\n1 | A\n2 | B\n"
        );
    }

    #[test]
    fn test_generate_is_case_insensitive() {
        let report = ReportService::default()
            .generate_report("JSON", &records())
            .unwrap();
        assert_eq!(report.file_type, "json");
    }

    #[test]
    fn test_unsupported_type_propagates() {
        let err = ReportService::default()
            .generate_report("xml", &records())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedReportType(ref t) if t == "xml"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let service = ReportService::default();
        let first = service.generate_report("pdf", &records()).unwrap();
        let second = service.generate_report("pdf", &records()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_name_uses_extension() {
        let report = ReportService::default().generate_report("pdf", &[]).unwrap();
        assert_eq!(report.file_name("monthly"), "monthly.pdf");
    }

    #[test]
    fn test_save_writes_content() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("nested");

        let report = ReportService::default()
            .generate_report("json", &records())
            .unwrap();
        let path = report.save(&output_dir, "report").unwrap();

        assert_eq!(path, output_dir.join("report.json"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report.content);
    }

    #[test]
    fn test_save_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let report = ReportService::default().generate_report("csv", &[]).unwrap();
        let err = report.save(&blocker, "report").unwrap_err();

        match err {
            Error::FileWrite { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
