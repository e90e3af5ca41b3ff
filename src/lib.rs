// src/lib.rs
pub mod datetime;
pub mod error;
pub mod filter;
pub mod path;
pub mod size;
pub mod text;

pub use datetime::DayBounds;
pub use error::{FilterKitError, Result};
pub use filter::{DEFAULT_WILDCARD, FilterEntry, FilterMode, apply_filter, classify_all};
pub use size::FileSize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
