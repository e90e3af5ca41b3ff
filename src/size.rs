// src/size.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte count with human-readable formatting.
///
/// `{}` prints the raw byte count; `{:#}` prints the human form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Human form with a 1024 divider.
    pub fn to_human(self) -> String {
        self.to_human_with(1024)
    }

    /// Human form stepping through KB/MB/GB/TB by `divider`; a zero
    /// divider falls back to 1024.
    pub fn to_human_with(self, divider: u64) -> String {
        let step = if divider == 0 { 1024.0 } else { divider as f64 };
        let bytes = self.0 as f64;
        if bytes < step {
            return format!("{} B", self.0);
        }

        let kb = bytes / step;
        if kb < step {
            return format!("{kb:.2} KB");
        }

        let mb = kb / step;
        if mb < step {
            return format!("{mb:.2} MB");
        }

        let gb = mb / step;
        if gb < step {
            return format!("{gb:.2} GB");
        }

        format!("{:.2} TB", gb / step)
    }

    /// Human form with the exact byte count appended.
    pub fn to_human_detailed(self, divider: u64) -> String {
        format!("{} ({} B)", self.to_human_with(divider), self.0)
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
