//! Error types for sexagenary combinations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_primitives::{Dizhi, FormatError, Tiangan};

/// Which leaf cycle a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleKind {
    Tiangan,
    Dizhi,
}

impl CycleKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tiangan => "Tiangan",
            Self::Dizhi => "Dizhi",
        }
    }
}

/// Errors from building, narrowing or formatting combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GanzhiError {
    /// The yin/yang of the stem and the branch differ, so they never co-occur.
    InvalidCombination { tiangan: Tiangan, dizhi: Dizhi },
    /// A [`TianganOrDizhi`](crate::TianganOrDizhi) was narrowed to the kind it does not hold.
    InvalidCast {
        expected: CycleKind,
        found: CycleKind,
    },
    /// Unsupported format code.
    Format(FormatError),
}

impl Display for GanzhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCombination { tiangan, dizhi } => write!(
                f,
                "invalid combination: the yinyangs of the tiangan {tiangan} ({}) and the dizhi {dizhi} ({}) do not match",
                tiangan.yinyang().name(),
                dizhi.yinyang().name()
            ),
            Self::InvalidCast { expected, found } => write!(
                f,
                "invalid cast: the value is a {}, so it cannot be converted to a {}",
                found.name(),
                expected.name()
            ),
            Self::Format(e) => write!(f, "format error: {e}"),
        }
    }
}

impl Error for GanzhiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatError> for GanzhiError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
