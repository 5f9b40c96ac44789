//! Reading and writing the `VERSION` file.

use crate::error::Result;
use crate::version::Version;
use std::fs;
use std::path::Path;

/// Read the current version from a `VERSION` file.
///
/// The file must contain exactly one `X.Y.Z` version string, optionally
/// followed by trailing whitespace/newline.
pub fn read_version_file(path: &Path) -> Result<Version> {
    let raw = fs::read_to_string(path)?;
    Version::parse(raw.trim())
}

/// Write a version back to the `VERSION` file, newline-terminated.
pub fn write_version_file(path: &Path, version: &Version) -> Result<()> {
    fs::write(path, format!("{}\n", version))?;
    Ok(())
}
