//! Placeholder generation: directory setup and the rank × suit iteration.

use crate::config::GeneratorConfig;
use crate::error::CardgenError;
use crate::output::placeholder_path;
use crate::ports::PlaceholderSink;

/// Generates one blank placeholder file per configured (rank, suit) pair.
pub struct PlaceholderGenerator {
    config: GeneratorConfig,
}

impl PlaceholderGenerator {
    /// Create a generator for the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Number of files a full run produces: ranks × suits.
    #[must_use]
    pub fn expected_total(&self) -> usize {
        self.config.ranks.len() * self.config.suits.len()
    }

    /// Create the output directory tree if it does not already exist.
    ///
    /// Succeeds silently when the directory is present; prints a notice when
    /// it is created.
    ///
    /// # Errors
    ///
    /// Returns [`CardgenError::CreateDir`] if the tree cannot be created.
    pub fn ensure_output_directory(&self) -> Result<(), CardgenError> {
        let dir = &self.config.output_dir;
        if dir.exists() {
            return Ok(());
        }
        std::fs::create_dir_all(dir)
            .map_err(|source| CardgenError::CreateDir { path: dir.clone(), source })?;
        println!("Created directory {}", dir.display());
        Ok(())
    }

    /// Write one blank placeholder per (rank, suit) pair, ranks outer and
    /// suits inner, printing a progress line per file.
    ///
    /// Iterations are independent; a failure aborts the remaining pairs and
    /// leaves already-written files on disk.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn generate_all(&self, sink: &dyn PlaceholderSink) -> Result<usize, CardgenError> {
        let mut written = 0;
        for rank in &self.config.ranks {
            for suit in &self.config.suits {
                let path = placeholder_path(&self.config.output_dir, rank, suit);
                sink.write_blank(self.config.width, self.config.height, &path)?;
                println!("Wrote {}", path.display());
                written += 1;
            }
        }
        Ok(written)
    }
}
