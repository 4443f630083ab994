//! PNG export of stitched images with marker coverage highlighted

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::algorithm::coverage::CoverageMask;
use crate::analysis::stitching::Image;
use crate::io::configuration::{BACKGROUND_COLOR, EXPORT_PIXEL_SCALE, MARKER_COLOR, ROUGH_COLOR};
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Colour of one image pixel given its coverage
pub fn pixel_color(image: &Image, coverage: &CoverageMask, row: usize, col: usize) -> Rgba<u8> {
    let set = image.get((row, col)).copied().unwrap_or(false);
    if !set {
        Rgba(BACKGROUND_COLOR)
    } else if coverage.is_covered(row, col) {
        Rgba(MARKER_COLOR)
    } else {
        Rgba(ROUGH_COLOR)
    }
}

/// Export the stitched image as a PNG, each pixel scaled to a small square
///
/// # Errors
///
/// Returns an error if:
/// - The image is empty or the coverage overlay has different dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(image: &Image, coverage: &CoverageMask, output_path: &Path) -> Result<()> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &"nothing to export",
        ));
    }
    if coverage.dims() != (rows, cols) {
        let (coverage_rows, coverage_cols) = coverage.dims();
        return Err(invalid_parameter(
            "coverage",
            &format!("{coverage_rows}x{coverage_cols}"),
            &format!("expected {rows}x{cols} to match the image"),
        ));
    }

    let width = cols as u32 * EXPORT_PIXEL_SCALE;
    let height = rows as u32 * EXPORT_PIXEL_SCALE;
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / EXPORT_PIXEL_SCALE) as usize;
        let col = (x / EXPORT_PIXEL_SCALE) as usize;
        pixel_color(image, coverage, row, col)
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), width, height, "image exported");
    Ok(())
}
