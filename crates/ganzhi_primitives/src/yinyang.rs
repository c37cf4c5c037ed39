//! Yin/yang parity of stems and branches.
//!
//! A stem or branch with an even 0-based index is yang, odd is yin.
//! Only a yang stem with a yang branch (or yin with yin) forms a
//! sexagenary pair.

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Yinyang {
    Yang,
    Yin,
}

impl Yinyang {
    /// Polarity of a 0-based cycle index.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// The other polarity.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}
