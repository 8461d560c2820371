//! @ai:module:intent CSV report generation
//! @ai:module:layer domain
//! @ai:module:public_api CsvReport
//! @ai:module:stateless true

use crate::error::Result;
use crate::record::Record;
use crate::report::{ReportGenerator, ReportType};
use std::fmt::Write as FmtWrite;

const PREFIX: &str = "Generated CSV Content: ";
const HEADER: &str = "id | Name";

/// @ai:intent Renders records as pipe-delimited lines
///
/// Values are written as-is. A name containing ` | ` or a newline produces
/// ambiguous rows.
pub struct CsvReport;

impl CsvReport {
    /// @ai:intent Create a new CSV report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReport {
    /// @ai:intent Render a header line and one line per record
    /// @ai:post output starts with the prefix and header, records in input order
    /// @ai:effects pure
    fn generate(&self, records: &[Record]) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}{}", PREFIX, HEADER).unwrap();

        for record in records {
            writeln!(output, "{} | {}", record.id, record.name).unwrap();
        }

        Ok(output)
    }

    fn file_type(&self) -> &'static str {
        ReportType::Csv.as_str()
    }

    fn report_type(&self) -> ReportType {
        ReportType::Csv
    }
}
