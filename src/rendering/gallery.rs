//! Batch rendering of every preset in a [`GalleryConfig`].

use std::path::{Path, PathBuf};

use pixel_engine::PixelBuffer;

use super::save_png;
use crate::error::RenderError;
use crate::models::GalleryConfig;

/// Outcome of [`render_gallery`]
#[derive(Debug, Default)]
pub struct GalleryReport {
    /// Files written, in preset order
    pub written: Vec<PathBuf>,

    /// Presets that could not be rendered, with the reason
    pub failed: Vec<(String, RenderError)>,
}

impl GalleryReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render `image` through every preset into `output_dir/<preset>.png`.
///
/// A bad preset does not stop the others; it is recorded in
/// [`GalleryReport::failed`]. Only failing to create `output_dir` is an
/// error.
pub fn render_gallery(
    image: &PixelBuffer,
    config: &GalleryConfig,
    output_dir: &Path,
) -> Result<GalleryReport, RenderError> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = GalleryReport::default();
    for preset in &config.presets {
        let rendered = preset
            .pipeline()
            .map_err(RenderError::from)
            .and_then(|pipeline| {
                let path = output_dir.join(preset.file_name());
                save_png(&path, &pipeline.run(image))?;
                Ok(path)
            });

        match rendered {
            Ok(path) => {
                tracing::info!(preset = %preset.name, path = %path.display(), "Rendered preset");
                report.written.push(path);
            }
            Err(e) => {
                tracing::error!(preset = %preset.name, %e, "Failed to render preset");
                report.failed.push((preset.name.clone(), e));
            }
        }
    }

    Ok(report)
}
