/// Folder under the export root that holds exported reports.
pub const REPORTS_FOLDER_NAME: &str = "reports";

/// Hash algorithm used for content addressing.
pub const HASH_ALGORITHM: &str = "sha256";

/// Media type recorded for exported report bodies.
pub const REPORT_MEDIA_TYPE: &str = "text/plain; charset=utf-8";

/// Extension of exported report bodies.
pub const REPORT_EXTENSION: &str = "txt";

/// Extension of the metadata sidecar written next to each report.
pub const METADATA_EXTENSION: &str = "json";
