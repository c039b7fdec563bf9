//! Icon batch writer
//!
//! Renders every configured size and saves it as `<dir>/icon-<size>.png`,
//! reporting each file on the supplied writer.

use std::io::Write;
use std::path::PathBuf;

use image::ImageFormat;

use crate::icon::{render_icon, IconError};

/// Directory the icons are written to, relative to the working directory
pub const OUTPUT_DIR: &str = "icons";

/// Sizes required by the extension manifest, in write order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// A set of icons to render into one directory
#[derive(Debug, Clone)]
pub struct IconBatch {
    out_dir: PathBuf,
    sizes: Vec<u32>,
}

impl Default for IconBatch {
    fn default() -> Self {
        Self::new(OUTPUT_DIR)
    }
}

impl IconBatch {
    /// Batch writing the standard icon sizes into `out_dir`
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            sizes: ICON_SIZES.to_vec(),
        }
    }

    /// File name for an icon of the given size
    pub fn file_name(size: u32) -> String {
        format!("icon-{}.png", size)
    }

    /// Render and save every icon, then report completion.
    ///
    /// Files written before a failure are left in place.
    pub fn write_all<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>, IconError> {
        tracing::info!(dir = %self.out_dir.display(), sizes = ?self.sizes, "writing icon set");

        std::fs::create_dir_all(&self.out_dir).map_err(|source| IconError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let image = render_icon(size)?;

            let file_name = Self::file_name(size);
            let path = self.out_dir.join(&file_name);
            image
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| IconError::Save {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(size, path = %path.display(), "saved icon");

            writeln!(out, "Created {}/{}", self.out_dir.display(), file_name)?;
            written.push(path);
        }

        writeln!(out, "All icons created successfully!")?;
        Ok(written)
    }
}
