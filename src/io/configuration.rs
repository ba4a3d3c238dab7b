//! Runtime configuration defaults and output settings

// Default values for configurable parameters
/// Fixed seed for reproducible evolution
pub const DEFAULT_SEED: u64 = 42;

/// Default population size
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// Default number of generations to evolve
pub const DEFAULT_GENERATIONS: usize = 5000;

/// Default number of snapshots saved across the run
pub const DEFAULT_SAMPLES_TO_SAVE: usize = 10;

// Output settings
/// Prefix for snapshot filenames (`generation<N>.png`)
pub const SNAPSHOT_PREFIX: &str = "generation";
/// Filename for the assembled evolution animation
pub const GIF_FILENAME: &str = "evolution.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 100;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
