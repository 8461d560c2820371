//! @ai:module:intent Select a concrete report generator from a type token
//! @ai:module:layer application
//! @ai:module:public_api ReportFactory
//! @ai:module:depends_on report, error
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::{CsvReport, JsonReport, PdfReport, ReportGenerator, ReportType};

/// @ai:intent Maps report types to fresh generator instances
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFactory;

impl ReportFactory {
    /// @ai:intent Create a new report factory
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Build the generator for a type token
    /// @ai:pre report_type is compared case-insensitively
    /// @ai:post Ok generator's file_type matches the lower-cased token
    /// @ai:example ("PDF") -> Ok(PdfReport)
    /// @ai:example ("docx") -> Err(UnsupportedReportType("docx"))
    /// @ai:effects pure
    pub fn create_report(&self, report_type: &str) -> Result<Box<dyn ReportGenerator>> {
        let report_type: ReportType = report_type.parse()?;
        Ok(self.create(report_type))
    }

    /// @ai:intent Build the generator for an already parsed type
    /// @ai:effects pure
    pub fn create(&self, report_type: ReportType) -> Box<dyn ReportGenerator> {
        match report_type {
            ReportType::Csv => Box::new(CsvReport::new()),
            ReportType::Pdf => Box::new(PdfReport::new()),
            ReportType::Json => Box::new(JsonReport::new()),
        }
    }

    /// @ai:intent List every type this factory can build
    /// @ai:effects pure
    pub fn supported_types(&self) -> &'static [ReportType] {
        &ReportType::ALL
    }
}
