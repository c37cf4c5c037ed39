//! Sexagenary (Ganzhi) combinations of stems and branches.
//!
//! This crate provides:
//! - [`Ganzhi`], the 60-element cycle formed by pairing a [`Tiangan`] with a
//!   [`Dizhi`] of the same yin/yang polarity
//! - [`TianganOrDizhi`], a value holding exactly one stem or one branch with
//!   stepping and formatting dispatched to whichever is held
//!
//! The two types are independent; both build only on `ganzhi_primitives`.

pub mod error;
pub mod ganzhi;
pub mod tiangan_or_dizhi;

pub use error::{CycleKind, GanzhiError};
pub use ganzhi::{ALL_GANZHIS, GANZHI_COUNT, Ganzhi};
pub use tiangan_or_dizhi::TianganOrDizhi;

// Re-export the leaf types so callers don't need to depend on ganzhi_primitives directly.
pub use ganzhi_primitives::{Dizhi, FormatCode, FormatError, Tiangan, Yinyang};
