//! A value that is either a stem or a branch.
//!
//! Stepping and formatting dispatch to whichever cycle is held and the result
//! stays in that cycle: a stem never turns into a branch.
//!
//! Ordering follows [`TianganOrDizhi::packed`]: every stem sorts before every
//! branch, and values of the same kind sort by index. A stem and a branch with
//! the same raw index are never equal.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use ganzhi_primitives::{Dizhi, FormatCode, Tiangan};

use crate::error::{CycleKind, GanzhiError};

/// Tag bit set in [`TianganOrDizhi::packed`] for branches.
const DIZHI_TAG: u8 = 0x10;

/// Either a [`Tiangan`] or a [`Dizhi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TianganOrDizhi {
    Tiangan(Tiangan),
    Dizhi(Dizhi),
}

impl TianganOrDizhi {
    /// Which cycle the value belongs to.
    pub const fn kind(self) -> CycleKind {
        match self {
            Self::Tiangan(_) => CycleKind::Tiangan,
            Self::Dizhi(_) => CycleKind::Dizhi,
        }
    }

    pub const fn is_tiangan(self) -> bool {
        matches!(self, Self::Tiangan(_))
    }

    pub const fn is_dizhi(self) -> bool {
        matches!(self, Self::Dizhi(_))
    }

    /// 0-based index within the held cycle.
    pub const fn index(self) -> u8 {
        match self {
            Self::Tiangan(t) => t.index(),
            Self::Dizhi(d) => d.index(),
        }
    }

    /// Compact key: the held index, with bit `0x10` set for branches.
    ///
    /// Stems occupy 0..=9 and branches 16..=27, so comparing keys orders all
    /// stems before all branches.
    pub const fn packed(self) -> u8 {
        match self {
            Self::Tiangan(t) => t.index(),
            Self::Dizhi(d) => d.index() | DIZHI_TAG,
        }
    }

    /// The stem, if a stem is held.
    pub const fn try_as_tiangan(self) -> Option<Tiangan> {
        match self {
            Self::Tiangan(t) => Some(t),
            Self::Dizhi(_) => None,
        }
    }

    /// The branch, if a branch is held.
    pub const fn try_as_dizhi(self) -> Option<Dizhi> {
        match self {
            Self::Tiangan(_) => None,
            Self::Dizhi(d) => Some(d),
        }
    }

    /// Both narrowings at once. Exactly one side is `Some`: the stem when a
    /// stem is held, the branch when a branch is held.
    pub const fn try_as_either(self) -> (Option<Tiangan>, Option<Dizhi>) {
        (self.try_as_tiangan(), self.try_as_dizhi())
    }

    /// The held stem, or [`GanzhiError::InvalidCast`] if a branch is held.
    pub fn as_tiangan(self) -> Result<Tiangan, GanzhiError> {
        self.try_as_tiangan().ok_or(GanzhiError::InvalidCast {
            expected: CycleKind::Tiangan,
            found: self.kind(),
        })
    }

    /// The held branch, or [`GanzhiError::InvalidCast`] if a stem is held.
    pub fn as_dizhi(self) -> Result<Dizhi, GanzhiError> {
        self.try_as_dizhi().ok_or(GanzhiError::InvalidCast {
            expected: CycleKind::Dizhi,
            found: self.kind(),
        })
    }

    /// Step within the held cycle; negative `n` steps backwards.
    pub const fn next(self, n: i64) -> Self {
        match self {
            Self::Tiangan(t) => Self::Tiangan(t.next(n)),
            Self::Dizhi(d) => Self::Dizhi(d.next(n)),
        }
    }

    /// Render the held value in the given format.
    pub const fn format(self, format: FormatCode) -> &'static str {
        match self {
            Self::Tiangan(t) => t.format(format),
            Self::Dizhi(d) => d.format(format),
        }
    }

    /// Render under a format code; `None` means `"G"`.
    pub fn to_string_with(self, code: Option<&str>) -> Result<String, GanzhiError> {
        let format = FormatCode::from_code(code)?;
        Ok(self.format(format).to_owned())
    }
}

impl From<Tiangan> for TianganOrDizhi {
    fn from(t: Tiangan) -> Self {
        Self::Tiangan(t)
    }
}

impl From<Dizhi> for TianganOrDizhi {
    fn from(d: Dizhi) -> Self {
        Self::Dizhi(d)
    }
}

impl TryFrom<TianganOrDizhi> for Tiangan {
    type Error = GanzhiError;

    fn try_from(value: TianganOrDizhi) -> Result<Self, Self::Error> {
        value.as_tiangan()
    }
}

impl TryFrom<TianganOrDizhi> for Dizhi {
    type Error = GanzhiError;

    fn try_from(value: TianganOrDizhi) -> Result<Self, Self::Error> {
        value.as_dizhi()
    }
}

impl PartialOrd for TianganOrDizhi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TianganOrDizhi {
    fn cmp(&self, other: &Self) -> Ordering {
        self.packed().cmp(&other.packed())
    }
}

impl Display for TianganOrDizhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tiangan(t) => Display::fmt(t, f),
            Self::Dizhi(d) => Display::fmt(d, f),
        }
    }
}

impl Add<i64> for TianganOrDizhi {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        match self {
            Self::Tiangan(t) => Self::Tiangan(t + rhs),
            Self::Dizhi(d) => Self::Dizhi(d + rhs),
        }
    }
}

impl Sub<i64> for TianganOrDizhi {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        match self {
            Self::Tiangan(t) => Self::Tiangan(t - rhs),
            Self::Dizhi(d) => Self::Dizhi(d - rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_index_different_kind_not_equal() {
        let t = TianganOrDizhi::from(Tiangan::Bing);
        let d = TianganOrDizhi::from(Dizhi::Yin);
        assert_eq!(t.index(), d.index());
        assert_ne!(t, d);
        assert!(t < d);
    }

    #[test]
    fn stems_sort_before_branches() {
        let last_stem = TianganOrDizhi::from(Tiangan::Gui);
        let first_branch = TianganOrDizhi::from(Dizhi::Zi);
        assert!(last_stem < first_branch);
        assert_eq!(last_stem.packed(), 9);
        assert_eq!(first_branch.packed(), 0x10);
    }

    #[test]
    fn try_as_either_has_one_side() {
        assert_eq!(
            TianganOrDizhi::from(Tiangan::Ding).try_as_either(),
            (Some(Tiangan::Ding), None)
        );
        assert_eq!(
            TianganOrDizhi::from(Dizhi::Mao).try_as_either(),
            (None, Some(Dizhi::Mao))
        );
    }

    #[test]
    fn cast_error_reports_kinds() {
        let err = TianganOrDizhi::from(Dizhi::Hai).as_tiangan().unwrap_err();
        assert_eq!(
            err,
            GanzhiError::InvalidCast {
                expected: CycleKind::Tiangan,
                found: CycleKind::Dizhi
            }
        );
    }

    #[test]
    fn display_dispatches() {
        assert_eq!(TianganOrDizhi::from(Tiangan::Geng).to_string(), "Geng");
        assert_eq!(TianganOrDizhi::from(Dizhi::Wei).to_string(), "Wei");
        assert_eq!(
            TianganOrDizhi::from(Dizhi::Wei).to_string_with(Some("C")).unwrap(),
            "未"
        );
    }
}
