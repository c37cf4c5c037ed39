//! Dizhi (Earthly Branch) cycle.
//!
//! Twelve branches repeat continuously: Zi (子) through Hai (亥), then Zi
//! again. Stepping by any signed count wraps modulo 12.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use crate::error::FormatError;
use crate::format::FormatCode;
use crate::yinyang::Yinyang;

/// Number of branches in the cycle.
pub const DIZHI_COUNT: u8 = 12;

/// The 12 Earthly Branches, starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dizhi {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi, 11 = Hai).
pub const ALL_DIZHIS: [Dizhi; 12] = [
    Dizhi::Zi,
    Dizhi::Chou,
    Dizhi::Yin,
    Dizhi::Mao,
    Dizhi::Chen,
    Dizhi::Si,
    Dizhi::Wu,
    Dizhi::Wei,
    Dizhi::Shen,
    Dizhi::You,
    Dizhi::Xu,
    Dizhi::Hai,
];

impl Dizhi {
    /// Branch at a 0-based index, wrapping modulo 12 (so `-1` is Hai).
    pub const fn from_index(index: i64) -> Self {
        ALL_DIZHIS[index.rem_euclid(DIZHI_COUNT as i64) as usize]
    }

    /// Branch at a 1-based order, wrapping modulo 12 (so `0` is Hai).
    pub const fn from_order(order: i64) -> Self {
        Self::from_index(order.rem_euclid(DIZHI_COUNT as i64) - 1)
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// 1-based order (Zi=1 .. Hai=12).
    pub const fn order(self) -> u8 {
        self.index() + 1
    }

    /// Pinyin name, capitalized.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
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

    /// Yang for Zi, Yin, Chen, Wu, Shen, Xu; yin for the others.
    pub const fn yinyang(self) -> Yinyang {
        Yinyang::from_index(self.index())
    }

    /// The branch `n` positions ahead; negative `n` steps backwards.
    pub const fn next(self, n: i64) -> Self {
        let n = n.rem_euclid(DIZHI_COUNT as i64);
        Self::from_index(self.index() as i64 + n)
    }

    /// Forward steps from `other` to `self`, in `[0, 12)`.
    pub const fn difference(self, other: Self) -> u8 {
        (self.index() + DIZHI_COUNT - other.index()) % DIZHI_COUNT
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Dizhi; 12] {
        &ALL_DIZHIS
    }
}

impl Display for Dizhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pinyin())
    }
}

impl Add<i64> for Dizhi {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self.next(rhs)
    }
}

impl Sub<i64> for Dizhi {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        self.next(-rhs.rem_euclid(DIZHI_COUNT as i64))
    }
}

impl Sub for Dizhi {
    type Output = u8;

    fn sub(self, rhs: Self) -> u8 {
        self.difference(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dizhis_count() {
        assert_eq!(ALL_DIZHIS.len(), DIZHI_COUNT as usize);
    }

    #[test]
    fn indices_sequential() {
        for (i, d) in ALL_DIZHIS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Dizhi::from_index(12), Dizhi::Zi);
        assert_eq!(Dizhi::from_index(-1), Dizhi::Hai);
        assert_eq!(Dizhi::from_index(-25), Dizhi::Hai);
    }

    #[test]
    fn from_order_wraps() {
        assert_eq!(Dizhi::from_order(1), Dizhi::Zi);
        assert_eq!(Dizhi::from_order(0), Dizhi::Hai);
        assert_eq!(Dizhi::from_order(13), Dizhi::Zi);
        assert_eq!(Dizhi::from_order(i64::MIN), Dizhi::from_index(i64::MIN.rem_euclid(12) - 1));
    }

    #[test]
    fn next_and_operators_agree() {
        for d in ALL_DIZHIS {
            for n in [-123_i64, -12, -1, 0, 1, 11, 12, 1232] {
                assert_eq!(d.next(n), d + n);
                assert_eq!(d.next(-n), d - n);
            }
        }
        assert_eq!(Dizhi::Hai.next(1), Dizhi::Zi);
        assert_eq!(Dizhi::Zi - 1, Dizhi::Hai);
    }

    #[test]
    fn difference_is_forward_distance() {
        assert_eq!(Dizhi::Chou - Dizhi::Zi, 1);
        assert_eq!(Dizhi::Zi - Dizhi::Chou, 11);
        assert_eq!(Dizhi::Wu - Dizhi::Wu, 0);
    }

    #[test]
    fn names_and_characters() {
        assert_eq!(Dizhi::Mao.pinyin(), "Mao");
        assert_eq!(Dizhi::You.chinese(), "酉");
        assert_eq!(Dizhi::Hai.to_string(), "Hai");
        assert_eq!(Dizhi::Zi.format(FormatCode::Chinese), "子");
        assert!(Dizhi::Zi.to_string_with(Some("")).is_err());
    }

    #[test]
    fn yinyang_alternates() {
        assert_eq!(Dizhi::Zi.yinyang(), Yinyang::Yang);
        assert_eq!(Dizhi::Chou.yinyang(), Yinyang::Yin);
        assert_eq!(Dizhi::Hai.yinyang(), Yinyang::Yin);
    }
}
