//! # Error Types

/// Errors from vocabscope operations.
///
/// The analysis pipeline itself is total; errors only arise at the
/// boundaries (loading vocabularies, reading configuration).
#[derive(Debug, thiserror::Error)]
pub enum VocabScopeError {
    /// The vocabulary resource had no header line.
    #[error("vocabulary resource is missing its header line")]
    MissingHeader,

    /// Configuration could not be applied.
    #[error("config error: {0}")]
    Config(String),

    /// Error from an external component (report or series sinks).
    #[error("{0}")]
    External(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for vocabscope operations.
pub type VSResult<T> = core::result::Result<T, VocabScopeError>;
