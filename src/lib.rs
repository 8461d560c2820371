//! @ai:module:intent Report generation library: factory, generators and service
//! @ai:module:layer application
//! @ai:module:public_api config, error, output, record, report, service
//! @ai:module:stateless true
//!
//! # Report Factory
//!
//! Selects a CSV, PDF or JSON report generator from a type token and renders
//! records with it.
//!
//! ## Example
//!
//! ```rust
//! use report_factory::{Record, ReportFactory, ReportService};
//!
//! let service = ReportService::new(ReportFactory::new());
//! let records = vec![Record::new(1, "A"), Record::new(2, "B")];
//!
//! let report = service.generate_report("CSV", &records).unwrap();
//! assert_eq!(report.file_type, "csv");
//! assert!(report.content.contains("2 | B"));
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod report;
pub mod service;

pub use config::{AppConfig, Destination};
pub use error::{Error, Result};
pub use output::{format_generated_report, format_report_types, OutputFormat};
pub use record::{load_records, parse_records, Record};
pub use report::{CsvReport, JsonReport, PdfReport, ReportFactory, ReportGenerator, ReportType};
pub use service::{GeneratedReport, ReportService};
