//! Tiangan (Heavenly Stem) cycle.
//!
//! Ten stems repeat continuously: Jia (甲) through Gui (癸), then Jia again.
//! Stepping by any signed count wraps modulo 10.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use crate::error::FormatError;
use crate::format::FormatCode;
use crate::yinyang::Yinyang;

/// Number of stems in the cycle.
pub const TIANGAN_COUNT: u8 = 10;

/// The 10 Heavenly Stems, starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tiangan {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia, 9 = Gui).
pub const ALL_TIANGANS: [Tiangan; 10] = [
    Tiangan::Jia,
    Tiangan::Yi,
    Tiangan::Bing,
    Tiangan::Ding,
    Tiangan::Wu,
    Tiangan::Ji,
    Tiangan::Geng,
    Tiangan::Xin,
    Tiangan::Ren,
    Tiangan::Gui,
];

impl Tiangan {
    /// Stem at a 0-based index, wrapping modulo 10 (so `-1` is Gui).
    pub const fn from_index(index: i64) -> Self {
        ALL_TIANGANS[index.rem_euclid(TIANGAN_COUNT as i64) as usize]
    }

    /// Stem at a 1-based order, wrapping modulo 10 (so `0` is Gui).
    pub const fn from_order(order: i64) -> Self {
        // rem_euclid first so `order - 1` cannot overflow at i64::MIN.
        Self::from_index(order.rem_euclid(TIANGAN_COUNT as i64) - 1)
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// 1-based order (Jia=1 .. Gui=10).
    pub const fn order(self) -> u8 {
        self.index() + 1
    }

    /// Pinyin name, capitalized.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Render in the given format.
    pub const fn format(self, format: FormatCode) -> &'static str {
        match format {
            FormatCode::Pinyin => self.pinyin(),
            FormatCode::Chinese => self.chinese(),
        }
    }

    /// Render under a format code; `None` means `"G"`.
    pub fn to_string_with(self, code: Option<&str>) -> Result<String, FormatError> {
        let format = FormatCode::from_code(code)?;
        Ok(self.format(format).to_owned())
    }

    /// Yang for Jia, Bing, Wu, Geng, Ren; yin for the others.
    pub const fn yinyang(self) -> Yinyang {
        Yinyang::from_index(self.index())
    }

    /// The stem `n` positions ahead; negative `n` steps backwards.
    pub const fn next(self, n: i64) -> Self {
        let n = n.rem_euclid(TIANGAN_COUNT as i64);
        Self::from_index(self.index() as i64 + n)
    }

    /// Forward steps from `other` to `self`, in `[0, 10)`.
    pub const fn difference(self, other: Self) -> u8 {
        (self.index() + TIANGAN_COUNT - other.index()) % TIANGAN_COUNT
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Tiangan; 10] {
        &ALL_TIANGANS
    }
}

impl Display for Tiangan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pinyin())
    }
}

impl Add<i64> for Tiangan {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self.next(rhs)
    }
}

impl Sub<i64> for Tiangan {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        // Reduce before negating: -i64::MIN overflows.
        self.next(-rhs.rem_euclid(TIANGAN_COUNT as i64))
    }
}

impl Sub for Tiangan {
    type Output = u8;

    fn sub(self, rhs: Self) -> u8 {
        self.difference(rhs)
    }
}
