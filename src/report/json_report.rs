//! @ai:module:intent JSON report generation
//! @ai:module:layer domain
//! @ai:module:public_api JsonReport
//! @ai:module:stateless true

use crate::error::Result;
use crate::record::Record;
use crate::report::{ReportGenerator, ReportType};
use serde::Serialize;

const PREFIX: &str = "Generated JSON Content: ";

/// Fields of a record that appear in the JSON output
#[derive(Serialize)]
struct Projection<'a> {
    id: i64,
    name: &'a str,
}

/// @ai:intent Serializes the id and name of each record as a JSON array
pub struct JsonReport;

impl JsonReport {
    /// @ai:intent Create a new JSON report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReport {
    /// @ai:intent Project records to {id, name} and serialize compactly
    /// @ai:post extra record fields never appear in the output
    /// @ai:effects pure
    fn generate(&self, records: &[Record]) -> Result<String> {
        let projected: Vec<Projection<'_>> = records
            .iter()
            .map(|record| Projection {
                id: record.id,
                name: &record.name,
            })
            .collect();

        let json = serde_json::to_string(&projected)?;
        Ok(format!("{}{}", PREFIX, json))
    }

    fn file_type(&self) -> &'static str {
        ReportType::Json.as_str()
    }

    fn report_type(&self) -> ReportType {
        ReportType::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn body(output: &str) -> Value {
        let json = output.strip_prefix(PREFIX).expect("missing prefix");
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_drops_extra_fields() {
        let records = vec![Record::new(1, "A").with_extra("extra", "x")];
        let output = JsonReport::new().generate(&records).unwrap();

        assert_eq!(body(&output), json!([{"id": 1, "name": "A"}]));
    }

    #[test]
    fn test_compact_output() {
        let records = vec![Record::new(1, "A"), Record::new(2, "B")];
        let output = JsonReport::new().generate(&records).unwrap();

        assert_eq!(
            output,
            r#"Generated JSON Content: [{"id":1,"name":"A"},{"id":2,"name":"B"}]"#
        );
    }

    #[test]
    fn test_empty_records() {
        let output = JsonReport::new().generate(&[]).unwrap();
        assert_eq!(output, "Generated JSON Content: []");
    }

    #[test]
    fn test_escapes_names() {
        let records = vec![Record::new(1, "say \"hi\"")];
        let output = JsonReport::new().generate(&records).unwrap();

        assert_eq!(body(&output)[0]["name"], "say \"hi\"");
    }

    #[test]
    fn test_file_type_is_lowercase() {
        assert_eq!(JsonReport::new().file_type(), "json");
    }
}
