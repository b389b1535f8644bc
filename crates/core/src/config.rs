//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the assessment service.
//! Nothing in the core reads environment variables; binaries read them and hand the raw values
//! to the parsing helpers in this module.

use crate::constants::{DEFAULT_OUTLOOK_YEAR, KNOWLEDGE_BASE_FILENAME, KNOWLEDGE_BASE_PATH};
use crate::knowledge_base::BalanceState;
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    knowledge_base_path: PathBuf,
    outlook_year: i32,
    balance: BalanceState,
}

impl CoreConfig {
    /// Earliest outlook year accepted.
    pub const MIN_OUTLOOK_YEAR: i32 = 1940;
    /// Latest outlook year accepted.
    pub const MAX_OUTLOOK_YEAR: i32 = 9998;

    /// Create a new `CoreConfig`.
    pub fn new(
        knowledge_base_path: PathBuf,
        outlook_year: i32,
        balance: BalanceState,
    ) -> CoreResult<Self> {
        if !(Self::MIN_OUTLOOK_YEAR..=Self::MAX_OUTLOOK_YEAR).contains(&outlook_year) {
            return Err(CoreError::Config(format!(
                "outlook year {outlook_year} outside {}..={}",
                Self::MIN_OUTLOOK_YEAR,
                Self::MAX_OUTLOOK_YEAR
            )));
        }

        Ok(Self {
            knowledge_base_path,
            outlook_year,
            balance,
        })
    }

    pub fn knowledge_base_path(&self) -> &Path {
        &self.knowledge_base_path
    }

    pub fn outlook_year(&self) -> i32 {
        self.outlook_year
    }

    pub fn balance(&self) -> BalanceState {
        self.balance
    }
}

/// Resolve the knowledge base file without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file. Otherwise this looks for
/// `crates/core/data/knowledge_base.json` relative to the current working directory and then
/// walks up from `CARGO_MANIFEST_DIR`, also checking `data/knowledge_base.json` at each level.
pub fn resolve_knowledge_base_path(override_path: Option<PathBuf>) -> CoreResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(CoreError::Config(format!(
            "knowledge base override is not a file: {}",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(KNOWLEDGE_BASE_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        for candidate in [
            ancestor.join(KNOWLEDGE_BASE_PATH),
            ancestor.join("data").join(KNOWLEDGE_BASE_FILENAME),
        ] {
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(CoreError::Config(
        "could not locate knowledge_base.json".into(),
    ))
}

/// Parse the outlook year from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default outlook year.
pub fn outlook_year_from_env_value(value: Option<String>) -> CoreResult<i32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_OUTLOOK_YEAR),
        Some(v) => v
            .parse::<i32>()
            .map_err(|_| CoreError::Config(format!("invalid outlook year '{v}'"))),
    }
}

/// Parse the balance state from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`BalanceState::Deficient`].
pub fn balance_from_env_value(value: Option<String>) -> CoreResult<BalanceState> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<BalanceState>()).transpose()?;

    Ok(parsed.unwrap_or(BalanceState::Deficient))
}
