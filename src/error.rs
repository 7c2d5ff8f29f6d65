//! Errors reported by typesetters.

use thiserror::Error;

/// Why a typesetter could not produce markup for a math segment.
///
/// The renderer never propagates this; it becomes an error marker in the
/// output instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesetError {
    /// The engine refused the source, usually because it is not valid LaTeX.
    #[error("{message}")]
    Rejected {
        /// The engine's diagnostic.
        message: String,
    },

    /// The engine is not loaded or cannot be reached.
    #[error("typesetter unavailable")]
    Unavailable,
}

impl TypesetError {
    /// A rejection carrying `message`.
    pub fn rejected<M: Into<String>>(message: M) -> Self {
        TypesetError::Rejected {
            message: message.into(),
        }
    }
}
