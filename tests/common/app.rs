//! Scratch workspace for integration tests.

use std::path::{Path, PathBuf};

use filterplay::models::GalleryConfig;
use filterplay::rendering::{load_png, save_png};
use pixel_engine::PixelBuffer;

/// A temporary directory with helpers for writing inputs and reading outputs
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Save `buffer` as `<name>` and return its path
    pub fn write_png(&self, name: &str, buffer: &PixelBuffer) -> PathBuf {
        let path = self.path().join(name);
        save_png(&path, buffer).expect("Failed to write test PNG");
        path
    }

    /// Load a PNG relative to the workspace
    pub fn read_png(&self, name: impl AsRef<Path>) -> PixelBuffer {
        let path = self.path().join(name);
        load_png(&path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Write a presets file and return its path
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path().join("presets.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Write and load a presets file
    pub fn config(&self, yaml: &str) -> GalleryConfig {
        GalleryConfig::load(Some(&self.write_config(yaml)))
    }

    /// File names in `dir`, sorted
    pub fn list(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path().join(dir))
            .expect("Failed to read dir")
            .map(|entry| {
                entry
                    .expect("Failed to read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}
