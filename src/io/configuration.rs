//! Assembly constants and runtime configuration defaults

// Tile geometry
/// Width of the border ring dropped from every tile when stitching
pub const TILE_BORDER_WIDTH: usize = 1;
/// Smallest tile that still has an interior after stripping the border
pub const MIN_TILE_SIZE: usize = 2 * TILE_BORDER_WIDTH + 1;
/// Largest tile whose borders fit into a 64-bit edge hash
pub const MAX_TILE_SIZE: usize = 64;

// Orientation
/// Maximum transforms needed to bring any border reading to any other
pub const MAX_NORMALIZE_STEPS: usize = 2;

/// Default marker footprint, `#` marks the pixels that must be set
pub const SEA_MONSTER: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   ",
);

// Input discovery
/// Extension of tile description files picked up from directories
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_image";
/// Scale factor applied to each pixel of an exported image
pub const EXPORT_PIXEL_SCALE: u32 = 4;
/// Colour of unset pixels in exported images
pub const BACKGROUND_COLOR: [u8; 4] = [16, 42, 67, 255];
/// Colour of set pixels not covered by a marker
pub const ROUGH_COLOR: [u8; 4] = [158, 202, 225, 255];
/// Colour of set pixels covered by a marker
pub const MARKER_COLOR: [u8; 4] = [240, 128, 40, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
