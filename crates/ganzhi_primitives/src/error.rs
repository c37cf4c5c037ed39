//! Error types for leaf-cycle formatting.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A format code other than `"G"` or `"C"` was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    code: String,
}

impl FormatError {
    pub(crate) fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
        }
    }

    /// The rejected format code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported format code {:?}: expected \"G\" (pinyin) or \"C\" (chinese)",
            self.code
        )
    }
}

impl Error for FormatError {}
