//! Destination filename and path derivation.

use std::path::{Path, PathBuf};

/// File extension for generated placeholders.
pub const PLACEHOLDER_EXT: &str = "png";

/// Derive the filename for a rank/suit pair: `<rank>_<suit>.png`.
///
/// Labels are joined verbatim; no sanitization is performed.
#[must_use]
pub fn placeholder_filename(rank: &str, suit: &str) -> String {
    format!("{rank}_{suit}.{PLACEHOLDER_EXT}")
}

/// Derive the full destination path for a rank/suit pair.
#[must_use]
pub fn placeholder_path(dir: &Path, rank: &str, suit: &str) -> PathBuf {
    dir.join(placeholder_filename(rank, suit))
}
