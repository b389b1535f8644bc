//! Constants used throughout the oheng core crate.

/// Knowledge base location relative to the workspace root.
pub const KNOWLEDGE_BASE_PATH: &str = "crates/core/data/knowledge_base.json";

/// Knowledge base file name, used when searching relative to the crate manifest.
pub const KNOWLEDGE_BASE_FILENAME: &str = "knowledge_base.json";

/// Upper bound on the knowledge base file size; anything larger is treated as misconfiguration.
pub const MAX_KNOWLEDGE_BASE_BYTES: u64 = 1024 * 1024;

/// Outlook year used when none is configured. Reports cover this year and the next.
pub const DEFAULT_OUTLOOK_YEAR: i32 = 2025;

/// BMI at or above which a subject is no longer underweight.
pub const BMI_NORMAL_LOWER: f64 = 18.5;

/// BMI at or above which a subject is overweight.
pub const BMI_OVERWEIGHT_LOWER: f64 = 25.0;

/// Nutrients appended for overweight subjects.
pub const WEIGHT_MANAGEMENT_BUNDLE: [&str; 2] = ["CLA", "Green tea extract"];

/// Nutrients appended for underweight subjects.
pub const WEIGHT_GAIN_BUNDLE: [&str; 2] = ["Protein", "Zinc"];

/// Rationale used for nutrients without a dedicated entry.
pub const FALLBACK_RATIONALE: &str = "supports bodily balance";
