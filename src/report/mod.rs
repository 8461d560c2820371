//! @ai:module:intent Report generators and the factory that selects them
//! @ai:module:layer domain
//! @ai:module:public_api ReportGenerator, ReportType, ReportFactory, CsvReport, PdfReport, JsonReport

pub mod csv_report;
pub mod factory;
pub mod json_report;
pub mod pdf_report;

pub use csv_report::CsvReport;
pub use factory::ReportFactory;
pub use json_report::JsonReport;
pub use pdf_report::PdfReport;

use crate::error::{Error, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// @ai:intent Output format a generator produces
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Csv,
    Pdf,
    Json,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Csv, ReportType::Pdf, ReportType::Json];

    /// @ai:intent Convert report type to its token
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Csv => "csv",
            ReportType::Pdf => "pdf",
            ReportType::Json => "json",
        }
    }

    /// @ai:intent Get file extension for this report type
    /// @ai:effects pure
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = Error;

    /// @ai:intent Parse a type token case-insensitively
    /// @ai:example ("CSV") -> Ok(Csv)
    /// @ai:example ("xlsx") -> Err(UnsupportedReportType("xlsx"))
    /// @ai:effects pure
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ReportType::Csv),
            "pdf" => Ok(ReportType::Pdf),
            "json" => Ok(ReportType::Json),
            _ => Err(Error::UnsupportedReportType(s.to_string())),
        }
    }
}

/// @ai:intent Capability shared by every report format
pub trait ReportGenerator: Send + Sync {
    /// @ai:intent Render records into the report body
    fn generate(&self, records: &[Record]) -> Result<String>;

    /// @ai:intent Lower-case file type tag of the output
    fn file_type(&self) -> &'static str;

    /// @ai:intent Report type this generator implements
    fn report_type(&self) -> ReportType;
}
