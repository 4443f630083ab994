//! Joining oriented tiles into one image once their borders are stripped

use ndarray::{Array2, Axis, Slice};

use crate::algorithm::assembly::Layout;
use crate::io::configuration::TILE_BORDER_WIDTH;
use crate::io::error::{PuzzleError, Result};

/// Dense pixel matrix, `true` for set pixels
pub type Image = Array2<bool>;

/// Concatenate tile interiors row-major by grid position
///
/// The image measures `rows × (N − 2)` by `cols × (N − 2)` for tiles of size N.
///
/// # Errors
///
/// Returns `MalformedLayout` if a grid position has no tile
pub fn stitch(layout: &Layout) -> Result<Image> {
    let (rows, cols) = layout.dims();
    let inner = layout.tile_size().saturating_sub(2 * TILE_BORDER_WIDTH);
    let mut image = Image::from_elem((rows * inner, cols * inner), false);

    for row in 0..rows {
        for col in 0..cols {
            let tile = layout
                .tile_at(row, col)
                .ok_or_else(|| PuzzleError::MalformedLayout {
                    reason: format!("no tile at ({row}, {col})"),
                })?;
            image
                .slice_axis_mut(Axis(0), Slice::from(row * inner..(row + 1) * inner))
                .slice_axis_move(Axis(1), Slice::from(col * inner..(col + 1) * inner))
                .assign(&tile.interior());
        }
    }

    tracing::debug!(
        height = image.nrows(),
        width = image.ncols(),
        "image stitched"
    );
    Ok(image)
}

/// Render an image as `#`/`.` text lines
pub fn render(image: &Image) -> String {
    image
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&pixel| if pixel { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of set pixels in an image
pub fn count_set(image: &Image) -> usize {
    image.iter().filter(|&&pixel| pixel).count()
}
