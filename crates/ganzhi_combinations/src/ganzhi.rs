//! Ganzhi (sexagenary) cycle.
//!
//! A ganzhi pairs a stem with a branch. Stems advance modulo 10 and branches
//! modulo 12 in lockstep, so the pair repeats every lcm(10, 12) = 60 steps.
//! Because 10 and 12 are both even, a stem and a branch only ever meet when
//! their indices share parity: 60 of the 120 possible pairs occur.
//!
//! The cycle is stored as one 0-based index `g` in [0, 60) with
//! `g % 10 == tiangan.index()` and `g % 12 == dizhi.index()`.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use ganzhi_primitives::{Dizhi, FormatCode, Tiangan, Yinyang};

use crate::error::GanzhiError;

/// Number of elements in the sexagenary cycle.
pub const GANZHI_COUNT: u8 = 60;

/// One element of the 60-element sexagenary cycle.
///
/// Ordered, compared and hashed by position in the cycle (Jiazi first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ganzhi {
    /// 0-based position, always in [0, 60).
    index: u8,
}

/// All 60 ganzhis in order (index 0 = Jiazi, 59 = Guihai).
pub const ALL_GANZHIS: [Ganzhi; 60] = {
    let mut all = [Ganzhi { index: 0 }; 60];
    let mut i = 0;
    while i < all.len() {
        all[i] = Ganzhi { index: i as u8 };
        i += 1;
    }
    all
};

impl Ganzhi {
    /// Jiazi (甲子), the first element of the cycle.
    pub const JIAZI: Self = Self { index: 0 };

    /// Ganzhi at a 0-based index, wrapping modulo 60.
    pub const fn from_index(index: i64) -> Self {
        Self {
            index: index.rem_euclid(GANZHI_COUNT as i64) as u8,
        }
    }

    /// Ganzhi at a 1-based ordinal (Jiazi = 1), wrapping modulo 60.
    ///
    /// Every integer maps to an element: `0` is Guihai, `61` is Jiazi,
    /// `-2` equals `58`.
    pub const fn from_ordinal(ordinal: i64) -> Self {
        let n = GANZHI_COUNT as i64;
        Self {
            index: ((ordinal.rem_euclid(n) + n - 1) % n) as u8,
        }
    }

    /// Combine a stem and a branch.
    ///
    /// Fails with [`GanzhiError::InvalidCombination`] when their yin/yang
    /// differ. Otherwise returns the unique `g` in [0, 60) with
    /// `g ≡ t (mod 10)` and `g ≡ d (mod 12)`, namely `g = (6t - 5d) mod 60`:
    ///
    /// - mod 10: `6t ≡ t + 5t`, and both `5t` and `5d` are `0` when even or
    ///   `5` when odd, so they cancel for a same-parity pair.
    /// - mod 12: `-5d ≡ d + 6d`, and both `6t` and `6d` are `0` when even or
    ///   `6` when odd, so `6t - 5d ≡ d + 6t + 6d ≡ d`.
    pub fn from_pair(tiangan: Tiangan, dizhi: Dizhi) -> Result<Self, GanzhiError> {
        if tiangan.yinyang() != dizhi.yinyang() {
            return Err(GanzhiError::InvalidCombination { tiangan, dizhi });
        }
        let g = 6 * i16::from(tiangan.index()) - 5 * i16::from(dizhi.index());
        Ok(Self {
            index: g.rem_euclid(i16::from(GANZHI_COUNT)) as u8,
        })
    }

    /// 0-based index (Jiazi=0 .. Guihai=59).
    pub const fn index(self) -> u8 {
        self.index
    }

    /// 1-based ordinal (Jiazi=1 .. Guihai=60).
    pub const fn ordinal(self) -> u8 {
        self.index + 1
    }

    /// Stem half.
    pub const fn tiangan(self) -> Tiangan {
        Tiangan::from_index(self.index as i64)
    }

    /// Branch half.
    pub const fn dizhi(self) -> Dizhi {
        Dizhi::from_index(self.index as i64)
    }

    /// Split into stem and branch; inverse of [`Ganzhi::from_pair`].
    pub const fn decompose(self) -> (Tiangan, Dizhi) {
        (self.tiangan(), self.dizhi())
    }

    /// Polarity shared by both halves.
    pub const fn yinyang(self) -> Yinyang {
        Yinyang::from_index(self.index)
    }

    /// The ganzhi `n` positions ahead; negative `n` steps backwards.
    pub const fn next(self, n: i64) -> Self {
        let n = n.rem_euclid(GANZHI_COUNT as i64);
        Self::from_index(self.index as i64 + n)
    }

    /// Forward steps from `other` to `self`, in [0, 60).
    ///
    /// Not symmetric: `a.difference(b) + b.difference(a)` is 60 unless
    /// `a == b`.
    pub const fn difference(self, other: Self) -> u8 {
        (self.index + GANZHI_COUNT - other.index) % GANZHI_COUNT
    }

    /// Render in the given format: `"Jiazi"` or `"甲子"`.
    pub fn format(self, format: FormatCode) -> String {
        let (tiangan, dizhi) = self.decompose();
        match format {
            FormatCode::Pinyin => {
                let mut s = String::from(tiangan.pinyin());
                s.push_str(&dizhi.pinyin().to_lowercase());
                s
            }
            FormatCode::Chinese => {
                let mut s = String::from(tiangan.chinese());
                s.push_str(dizhi.chinese());
                s
            }
        }
    }

    /// Render under a format code; `None` means `"G"`.
    pub fn to_string_with(self, code: Option<&str>) -> Result<String, GanzhiError> {
        let format = FormatCode::from_code(code)?;
        Ok(self.format(format))
    }

    /// All 60 ganzhis in order.
    pub const fn all() -> &'static [Ganzhi; 60] {
        &ALL_GANZHIS
    }
}

impl Display for Ganzhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(FormatCode::Pinyin))
    }
}

impl Add<i64> for Ganzhi {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self.next(rhs)
    }
}

impl Sub<i64> for Ganzhi {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        // Reduce before negating: -i64::MIN overflows.
        self.next(-rhs.rem_euclid(GANZHI_COUNT as i64))
    }
}

impl Sub for Ganzhi {
    type Output = u8;

    fn sub(self, rhs: Self) -> u8 {
        self.difference(rhs)
    }
}

impl From<Ganzhi> for (Tiangan, Dizhi) {
    fn from(g: Ganzhi) -> Self {
        g.decompose()
    }
}

impl TryFrom<(Tiangan, Dizhi)> for Ganzhi {
    type Error = GanzhiError;

    fn try_from((tiangan, dizhi): (Tiangan, Dizhi)) -> Result<Self, Self::Error> {
        Self::from_pair(tiangan, dizhi)
    }
}
