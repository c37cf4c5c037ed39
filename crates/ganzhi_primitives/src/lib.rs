//! Leaf cycles of the sexagenary system.
//!
//! This crate provides:
//! - The 10 Heavenly Stems ([`Tiangan`]) and the 12 Earthly Branches ([`Dizhi`])
//! - Yin/yang parity shared by both cycles
//! - The two supported text formats (Pinyin `"G"`, Chinese `"C"`)
//!
//! Every value is a small `Copy` enum. Stepping wraps modulo the cycle
//! length for any `i64`, including values far below zero.

pub mod dizhi;
pub mod error;
pub mod format;
pub mod tiangan;
pub mod yinyang;

pub use dizhi::{ALL_DIZHIS, DIZHI_COUNT, Dizhi};
pub use error::FormatError;
pub use format::FormatCode;
pub use tiangan::{ALL_TIANGANS, TIANGAN_COUNT, Tiangan};
pub use yinyang::Yinyang;
