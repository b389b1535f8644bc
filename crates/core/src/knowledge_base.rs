//! Element/balance nutrient knowledge base.
//!
//! The knowledge base is a JSON document loaded once at startup and shared read-only for the
//! lifetime of the process:
//!
//! ```json
//! {
//!   "wood":  { "deficient": { "nutrients": ["Vitamin B complex", "Zinc"] } },
//!   "fire":  { "deficient": { "nutrients": ["Coenzyme Q10"] }, "excess": { "nutrients": [] } },
//!   "earth": {},
//!   "metal": {},
//!   "water": {}
//! }
//! ```
//!
//! All five categories must be present. Within a category each balance state is optional; an
//! absent state is a valid "no data" outcome and looks up as an empty list. Unknown keys, wrong
//! types and blank nutrient names are rejected with the path of the offending field.

use crate::constants::MAX_KNOWLEDGE_BASE_BYTES;
use crate::element::ElementCategory;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const BUNDLED_KNOWLEDGE_BASE: &str = include_str!("../data/knowledge_base.json");

/// Which knowledge-base sub-table to consult for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceState {
    Deficient,
    Excess,
    Balanced,
}

impl BalanceState {
    pub const ALL: [BalanceState; 3] = [
        BalanceState::Deficient,
        BalanceState::Excess,
        BalanceState::Balanced,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BalanceState::Deficient => "deficient",
            BalanceState::Excess => "excess",
            BalanceState::Balanced => "balanced",
        }
    }
}

impl fmt::Display for BalanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BalanceState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        BalanceState::ALL
            .into_iter()
            .find(|state| state.key() == needle)
            .ok_or_else(|| CoreError::Config(format!("unknown balance state '{s}'")))
    }
}

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeBaseWire {
    wood: Option<CategoryWire>,
    fire: Option<CategoryWire>,
    earth: Option<CategoryWire>,
    metal: Option<CategoryWire>,
    water: Option<CategoryWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryWire {
    deficient: Option<EntryWire>,
    excess: Option<EntryWire>,
    balanced: Option<EntryWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryWire {
    nutrients: Vec<String>,
}

// ============================================================================
// Domain
// ============================================================================

/// Read-only mapping `ElementCategory × BalanceState → ordered nutrient names`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: HashMap<(ElementCategory, BalanceState), Vec<String>>,
}

impl KnowledgeBase {
    /// Load and validate a knowledge base file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error (see [`CoreError::is_config_error`]) if the file cannot be
    /// read, is larger than the accepted maximum, or does not match the schema.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let read_err = |source: std::io::Error| CoreError::KnowledgeBaseRead {
            path: path.to_path_buf(),
            source,
        };

        let metadata = std::fs::metadata(path).map_err(read_err)?;
        if metadata.len() > MAX_KNOWLEDGE_BASE_BYTES {
            return Err(CoreError::Config(format!(
                "knowledge base {} exceeds {} bytes",
                path.display(),
                MAX_KNOWLEDGE_BASE_BYTES
            )));
        }

        let text = std::fs::read_to_string(path).map_err(read_err)?;
        let kb = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            entries = kb.entries.len(),
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// The knowledge base shipped with the crate.
    pub fn bundled() -> CoreResult<Self> {
        Self::parse(BUNDLED_KNOWLEDGE_BASE)
    }

    /// Parse a knowledge base from JSON text.
    ///
    /// This uses `serde_path_to_error` so schema errors name the failing field, for example
    /// `water.deficient.nutrients[2]`.
    pub fn parse(json_text: &str) -> CoreResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let wire = match serde_path_to_error::deserialize::<_, KnowledgeBaseWire>(&mut deserializer)
        {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CoreError::KnowledgeBaseSchema(format!(
                    "at {path}: {source}"
                )));
            }
        };
        deserializer
            .end()
            .map_err(|e| CoreError::KnowledgeBaseSchema(format!("trailing content: {e}")))?;

        wire_to_domain(wire)
    }

    /// Ordered nutrient names for a category and balance state.
    ///
    /// Returns an empty slice when the combination is absent; that is not an error.
    pub fn lookup(&self, category: ElementCategory, balance: BalanceState) -> &[String] {
        self.entries
            .get(&(category, balance))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the table has an entry (possibly empty) for the combination.
    pub fn contains(&self, category: ElementCategory, balance: BalanceState) -> bool {
        self.entries.contains_key(&(category, balance))
    }
}

fn wire_to_domain(wire: KnowledgeBaseWire) -> CoreResult<KnowledgeBase> {
    let categories = [
        (ElementCategory::Wood, wire.wood),
        (ElementCategory::Fire, wire.fire),
        (ElementCategory::Earth, wire.earth),
        (ElementCategory::Metal, wire.metal),
        (ElementCategory::Water, wire.water),
    ];

    let mut entries = HashMap::new();
    for (category, category_wire) in categories {
        let category_wire = category_wire.ok_or(CoreError::MissingCategory(category))?;
        let states = [
            (BalanceState::Deficient, category_wire.deficient),
            (BalanceState::Excess, category_wire.excess),
            (BalanceState::Balanced, category_wire.balanced),
        ];

        for (balance, entry) in states {
            let Some(entry) = entry else { continue };
            let mut nutrients = Vec::with_capacity(entry.nutrients.len());
            for (index, name) in entry.nutrients.into_iter().enumerate() {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::KnowledgeBaseSchema(format!(
                        "at {}.{}.nutrients[{index}]: nutrient name cannot be empty",
                        category.key(),
                        balance.key()
                    )));
                }
                nutrients.push(trimmed.to_owned());
            }
            entries.insert((category, balance), nutrients);
        }
    }

    Ok(KnowledgeBase { entries })
}
