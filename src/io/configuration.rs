//! Generation constants and runtime configuration defaults

// Cellular automaton rules
/// Wall count at distance 1 that turns a cell into a wall in the threshold steps
pub const NEIGHBOR_WALL_CUTOFF: usize = 5;
/// Wall count at distance 2 at or below which the big-area step fills open space
pub const BIG_AREA_SPARSE_CUTOFF: usize = 2;

/// Number of rough passes run by the half-scale cave generator
pub const CAVE_V2_ROUGH_PASSES: usize = 10;
/// Upscaling factor applied after the rough passes
pub const CAVE_V2_SCALE_FACTOR: usize = 2;
/// Birth counts for the rough passes
pub const CAVE_V2_ROUGH_BORN: &[usize] = &[6, 7, 8];
/// Survival counts for the rough passes
pub const CAVE_V2_ROUGH_SURVIVE: &[usize] = &[3, 4, 5, 6, 7, 8];
/// Birth counts for the smoothing pass
pub const CAVE_V2_SMOOTH_BORN: &[usize] = &[5, 6, 7, 8];
/// Survival counts for the smoothing pass
pub const CAVE_V2_SMOOTH_SURVIVE: &[usize] = &[5, 6, 7, 8];

/// Exclusive upper bound of the fill draw, the draw itself starts at 1
pub const FILL_DRAW_UPPER: usize = 100;
/// Highest accepted fill probability
pub const MAX_FILL_PROBABILITY: usize = 100;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default map width in cells
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height in cells
pub const DEFAULT_HEIGHT: usize = 48;
/// Default floor probability for the standard cave generator
pub const DEFAULT_FILL_PROBABILITY: usize = 45;
/// Default floor probability for the half-scale cave generator
pub const DEFAULT_CAVE_V2_FILL_PROBABILITY: usize = 60;
/// Default number of automaton iterations for the standard cave generator
pub const DEFAULT_TOTAL_ITERATIONS: usize = 3;
/// Default iteration at which the big-area rule hands over to the nearest-neighbor rule
pub const DEFAULT_BIG_AREA_CUTOFF: usize = 2;
/// Default number of maps generated per run
pub const DEFAULT_MAP_COUNT: usize = 1;
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "maps";

// Output settings
/// Pixels per cell edge in exported images
pub const PIXEL_SCALE: u32 = 4;
/// Color of walkable cells
pub const FLOOR_COLOR: [u8; 4] = [214, 196, 160, 255];
/// Color of wall cells
pub const WALL_COLOR: [u8; 4] = [48, 44, 52, 255];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Final frame is held this many times longer than the others
pub const GIF_FINAL_FRAME_HOLD: u32 = 8;
/// Suffix added to stage animation filenames
pub const STAGES_SUFFIX: &str = "_stages";
