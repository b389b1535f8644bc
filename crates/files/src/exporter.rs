//! Content-addressed report export
//!
//! The [`ReportExporter`] writes the plain-text report body under an export root, addressed
//! by the SHA-256 of its content, with a JSON metadata sidecar next to it.
//!
//! # Storage Layout
//!
//! ```text
//! <export_root>/
//! └── reports/
//!     └── sha256/
//!         └── ab/
//!             └── cd/
//!                 ├── abcd12…ef.txt    # report body
//!                 └── abcd12…ef.json   # ExportMetadata
//! ```
//!
//! Identical report text always lands at the same path. Exporting it again is a no-op that
//! returns the stored metadata with `created: false`.

use crate::constants::{
    HASH_ALGORITHM, METADATA_EXTENSION, REPORTS_FOLDER_NAME, REPORT_EXTENSION, REPORT_MEDIA_TYPE,
};
use crate::sink::{DeliveryReceipt, ReportDocument, ReportSink};
use crate::FilesError;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata for an exported report, stored as the JSON sidecar.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ExportMetadata {
    pub hash_algorithm: String,

    /// Hexadecimal digest of the report body
    pub hash: String,

    /// Path of the body relative to the export root
    pub relative_path: String,

    pub size_bytes: u64,
    pub media_type: String,
    pub title: String,
    pub recommendations: Vec<String>,
    pub stored_at: DateTime<Utc>,

    /// False when the body was already present
    #[serde(skip)]
    pub created: bool,
}

/// Writes reports into a content-addressed directory tree.
#[derive(Debug)]
pub struct ReportExporter {
    root_directory: PathBuf,
}

impl ReportExporter {
    /// Creates an exporter rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidRootDirectory` if the path does not exist, is not a
    /// directory, or cannot be canonicalised.
    pub fn new(root_directory: &Path) -> Result<Self, FilesError> {
        if !root_directory.is_dir() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Not an existing directory: {}",
                root_directory.display()
            )));
        }

        let root_directory = root_directory.canonicalize().map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        Ok(Self { root_directory })
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Writes a report body and its metadata sidecar.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::EmptyReport` for a blank body, `FilesError::Io` if a directory or
    /// file cannot be written, and `FilesError::Metadata` if an existing sidecar is unreadable.
    pub fn export(&self, document: &ReportDocument) -> Result<ExportMetadata, FilesError> {
        if document.body.trim().is_empty() {
            return Err(FilesError::EmptyReport);
        }

        let hash = hex::encode(Sha256::digest(document.body.as_bytes()));
        let body_relative = relative_path(&hash, REPORT_EXTENSION);
        let body_path = self.root_directory.join(&body_relative);
        let metadata_path = self
            .root_directory
            .join(relative_path(&hash, METADATA_EXTENSION));

        if body_path.is_file() && metadata_path.is_file() {
            let mut existing = self.read_metadata(&metadata_path)?;
            existing.created = false;
            tracing::debug!(hash = %hash, "report already exported");
            return Ok(existing);
        }

        if let Some(parent) = body_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FilesError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create export directory {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        fs::write(&body_path, document.body.as_bytes()).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write report to {}: {}", body_path.display(), e),
            ))
        })?;

        let metadata = ExportMetadata {
            hash_algorithm: HASH_ALGORITHM.to_owned(),
            hash,
            relative_path: body_relative.to_string_lossy().into_owned(),
            size_bytes: document.body.len() as u64,
            media_type: REPORT_MEDIA_TYPE.to_owned(),
            title: document.title(),
            recommendations: document.recommendations.clone(),
            stored_at: Utc::now(),
            created: true,
        };

        let sidecar = serde_json::to_vec_pretty(&metadata).map_err(FilesError::Metadata)?;
        fs::write(&metadata_path, sidecar).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write metadata to {}: {}",
                    metadata_path.display(),
                    e
                ),
            ))
        })?;

        tracing::info!(
            hash = %metadata.hash,
            path = %body_path.display(),
            "exported report"
        );
        Ok(metadata)
    }

    /// Reads an exported report body by hash.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidPath` for a malformed hash and `FilesError::Io` if the
    /// report does not exist or cannot be read.
    pub fn read(&self, hash: &str) -> Result<String, FilesError> {
        validate_hash(hash)?;
        let body_path = self.root_directory.join(relative_path(hash, REPORT_EXTENSION));

        fs::read_to_string(&body_path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read report from {}: {}", body_path.display(), e),
            ))
        })
    }

    fn read_metadata(&self, path: &Path) -> Result<ExportMetadata, FilesError> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(FilesError::Metadata)
    }
}

impl ReportSink for ReportExporter {
    fn deliver(&self, document: &ReportDocument) -> Result<DeliveryReceipt, FilesError> {
        let metadata = self.export(document)?;
        Ok(DeliveryReceipt {
            location: self
                .root_directory
                .join(&metadata.relative_path)
                .display()
                .to_string(),
            created: metadata.created,
        })
    }
}

/// `reports/sha256/<shard1>/<shard2>/<hash>.<ext>`
fn relative_path(hash_hex: &str, extension: &str) -> PathBuf {
    Path::new(REPORTS_FOLDER_NAME)
        .join(HASH_ALGORITHM)
        .join(&hash_hex[0..2])
        .join(&hash_hex[2..4])
        .join(format!("{hash_hex}.{extension}"))
}

fn validate_hash(hash: &str) -> Result<(), FilesError> {
    if hash.len() == 64 && hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(FilesError::InvalidPath(format!(
            "not a sha256 hex digest: {hash}"
        )))
    }
}
