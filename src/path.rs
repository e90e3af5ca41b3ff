use std::path::{Path, PathBuf};

use crate::error::{FilterKitError, Result};

/// Directory containing the running executable.
pub fn base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|source| FilterKitError::ExecutablePath { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(FilterKitError::MissingParentDir)
}
