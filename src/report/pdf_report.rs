//! @ai:module:intent PDF report placeholder generation
//! @ai:module:layer domain
//! @ai:module:public_api PdfReport
//! @ai:module:stateless true

use crate::error::Result;
use crate::record::Record;
use crate::report::{ReportGenerator, ReportType};

/// @ai:intent Describes a PDF report in plain text; no PDF bytes are produced
pub struct PdfReport;

impl PdfReport {
    /// @ai:intent Create a new PDF report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReport {
    /// @ai:intent Describe the report using only the record count
    /// @ai:example ([r1, r2]) -> "Generated PDF Content: Report of 2 items with header and footer"
    /// @ai:effects pure
    fn generate(&self, records: &[Record]) -> Result<String> {
        Ok(format!(
            "Generated PDF Content: Report of {} items with header and footer",
            records.len()
        ))
    }

    fn file_type(&self) -> &'static str {
        ReportType::Pdf.as_str()
    }

    fn report_type(&self) -> ReportType {
        ReportType::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_record_count() {
        let records: Vec<_> = (1..=3).map(|i| Record::new(i, format!("n{i}"))).collect();
        let output = PdfReport::new().generate(&records).unwrap();

        assert_eq!(
            output,
            "Generated PDF Content: Report of 3 items with header and footer"
        );
    }

    #[test]
    fn test_empty_records() {
        let output = PdfReport::new().generate(&[]).unwrap();
        assert!(output.contains("Report of 0 items"));
    }

    #[test]
    fn test_does_not_render_names() {
        let output = PdfReport::new().generate(&[Record::new(1, "Zed")]).unwrap();
        assert!(!output.contains("Zed"));
    }

    #[test]
    fn test_file_type() {
        assert_eq!(PdfReport::new().file_type(), "pdf");
    }
}
