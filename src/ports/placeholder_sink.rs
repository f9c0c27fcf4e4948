//! Placeholder sink port for the external imaging capability.

use std::path::Path;

use crate::error::CardgenError;

/// Allocates blank transparent rasters and persists them to disk.
///
/// The contract with the collaborator: request a raster of exact size with
/// every pixel set to transparent white (R=255, G=255, B=255, A=0), persisted
/// at an exact path, silently overwriting any existing file.
pub trait PlaceholderSink {
    /// Write a fully transparent `width`×`height` raster to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the raster cannot be encoded or the file cannot
    /// be written.
    fn write_blank(&self, width: u32, height: u32, path: &Path) -> Result<(), CardgenError>;
}
