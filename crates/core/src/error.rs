use crate::element::ElementCategory;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read knowledge base {path}: {source}", path = path.display())]
    KnowledgeBaseRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("knowledge base schema mismatch: {0}")]
    KnowledgeBaseSchema(String),
    #[error("knowledge base is missing required category '{0}'")]
    MissingCategory(ElementCategory),
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// True for errors caused by missing or broken configuration (including the knowledge base).
    ///
    /// These are fatal to the current request but not to the process: the caller may reload
    /// the knowledge base and retry.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CoreError::KnowledgeBaseRead { .. }
                | CoreError::KnowledgeBaseSchema(_)
                | CoreError::MissingCategory(_)
                | CoreError::Config(_)
        )
    }
}

impl From<oheng_types::ValueError> for CoreError {
    fn from(err: oheng_types::ValueError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
