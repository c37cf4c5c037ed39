//! Text format selection.
//!
//! Two formats exist: Pinyin (code `"G"`, the default) and Chinese
//! characters (code `"C"`). Any other code is rejected with
//! [`FormatError`].

use std::str::FromStr;

use crate::error::FormatError;

/// Output format for stems, branches and their combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatCode {
    /// Pinyin, e.g. `Jia`, `Zi`. Code `"G"`.
    #[default]
    Pinyin,
    /// Chinese characters, e.g. `甲`, `子`. Code `"C"`.
    Chinese,
}

impl FormatCode {
    /// One-letter code of the format.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pinyin => "G",
            Self::Chinese => "C",
        }
    }

    /// Resolve an optional format code; an absent code means `"G"`.
    pub fn from_code(code: Option<&str>) -> Result<Self, FormatError> {
        code.map_or(Ok(Self::Pinyin), str::parse::<Self>)
    }
}

impl FromStr for FormatCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Self::Pinyin),
            "C" => Ok(Self::Chinese),
            other => Err(FormatError::new(other)),
        }
    }
}
