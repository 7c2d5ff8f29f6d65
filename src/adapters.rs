//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use crate::error::TypesetError;
use crate::nodes::MathMode;

/// Implement this adapter to typeset math segments with an engine of your
/// choice.
///
/// The engine is treated as a pure function: the same source and mode give
/// the same result, and a rejection only affects the segment it was called
/// for.
pub trait TypesetterAdapter {
    /// Typeset `source` in the given presentation mode, returning markup that
    /// is written to the output verbatim.
    ///
    /// `source` has already been trimmed and carries no delimiters.
    fn typeset(&self, source: &str, mode: MathMode) -> Result<String, TypesetError>;
}

impl<F> TypesetterAdapter for F
where
    F: Fn(&str, MathMode) -> Result<String, TypesetError>,
{
    fn typeset(&self, source: &str, mode: MathMode) -> Result<String, TypesetError> {
        self(source, mode)
    }
}
