//! Oheng Report Export
//!
//! This crate hands composed reports to the outside world.
//!
//! ## Design Principles
//!
//! - The core composes reports; this crate only stores or forwards the finished text
//! - Delivery goes through the [`ReportSink`] trait, so new destinations plug in without
//!   touching the pipeline
//! - Sinks receive endpoints and credentials as constructor parameters, never from globals
//! - Exported reports are immutable and content-addressed by SHA-256
//!
//! ## Example Usage
//!
//! ```no_run
//! use oheng_files::{ReportDocument, ReportExporter, ReportSink};
//! use oheng_types::NonEmptyText;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = ReportExporter::new(Path::new("exports"))?;
//! let document = ReportDocument::new(NonEmptyText::new("Hong")?, "Profile\n...", vec![]);
//! let receipt = exporter.deliver(&document)?;
//! println!("{}", receipt.location);
//! # Ok(())
//! # }
//! ```

mod constants;
mod exporter;
mod sink;

pub use constants::REPORTS_FOLDER_NAME;
pub use exporter::{ExportMetadata, ReportExporter};
pub use sink::{DeliveryReceipt, ReportDocument, ReportSink};

/// Errors that can occur while exporting or delivering a report
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Export root does not exist or is not a directory
    #[error("Invalid root directory: {0}")]
    InvalidRootDirectory(String),

    /// A hash or path did not have the expected shape
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Report body is empty")]
    EmptyReport,

    /// Metadata sidecar could not be written or parsed
    #[error("Metadata error: {0}")]
    Metadata(serde_json::Error),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
