//! Command-line interface and run orchestration

use crate::algorithm::executor::{EvolutionConfig, TileEvolution};
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_POPULATION_SIZE, DEFAULT_SAMPLES_TO_SAVE, DEFAULT_SEED,
    GIF_FILENAME, GIF_FRAME_DELAY_MS, SNAPSHOT_PREFIX,
};
use crate::io::error::{Result, configuration_error};
use crate::io::image::{export_canvas_as_png, load_target_image, load_tile_library};
use crate::io::progress::GenerationProgress;
use crate::io::visualization::SnapshotCapture;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilevolve")]
#[command(
    author,
    version,
    about = "Approximate an image with an evolving tile mosaic"
)]
/// Command-line arguments for the mosaic evolution tool
pub struct Cli {
    /// Target image to approximate
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of tile images forming the library
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Directory for snapshots and the final mosaic
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Population size
    #[arg(short, long, default_value_t = DEFAULT_POPULATION_SIZE)]
    pub population: usize,

    /// Number of generations to evolve
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Number of snapshots saved across the run
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES_TO_SAVE)]
    pub samples: usize,

    /// Random seed for reproducible evolution
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Assemble saved snapshots into an animated GIF
    #[arg(long)]
    pub gif: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generations between snapshots
    pub const fn snapshot_step(&self) -> usize {
        if self.samples == 0 {
            self.generations
        } else {
            let step = self.generations / self.samples;
            if step == 0 { 1 } else { step }
        }
    }
}

/// Orchestrates a full evolution run from CLI arguments
///
/// Loads the target and tile library, owns the generation loop, writes
/// snapshots at the configured cadence, and optionally assembles the GIF.
pub struct EvolutionRunner {
    cli: Cli,
    progress: Option<GenerationProgress>,
    capture: Option<SnapshotCapture>,
}

impl EvolutionRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
            capture: None,
        }
    }

    /// Execute the complete run
    ///
    /// # Errors
    ///
    /// Returns an error if loading, evolution, or any export fails
    pub fn run(&mut self) -> Result<()> {
        if self.cli.generations == 0 {
            return Err(configuration_error(
                "generations",
                &0,
                &"at least one generation is required",
            ));
        }

        let target = load_target_image(&self.cli.target)?;
        let library = load_tile_library(&self.cli.tiles)?;

        let config = EvolutionConfig {
            population_size: self.cli.population,
            generations: self.cli.generations,
            seed: self.cli.seed,
        };
        let mut evolution = TileEvolution::new(target, library, config)?;

        if self.cli.should_show_progress() {
            self.progress = Some(GenerationProgress::new(self.cli.generations));
        }
        if self.cli.gif {
            self.capture = Some(SnapshotCapture::new(self.cli.samples + 2));
        }

        let step = self.cli.snapshot_step();
        for generation in 1..=self.cli.generations {
            let best_fitness = evolution.execute_generation()?;

            if let Some(ref progress) = self.progress {
                progress.update(generation, best_fitness);
            }

            if generation == 1 || generation % step == 0 || generation == self.cli.generations {
                self.save_snapshot(&evolution, generation)?;
            }
        }

        let best = evolution.finish()?;
        if let Some(ref progress) = self.progress {
            progress.finish(best.fitness());
        }

        if let Some(ref capture) = self.capture {
            let gif_path = self.cli.output.join(GIF_FILENAME);
            let gif_str = gif_path
                .to_str()
                .ok_or_else(|| configuration_error("output", &gif_path.display(), &"invalid path"))?;
            capture.export_gif(gif_str, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    fn save_snapshot(&mut self, evolution: &TileEvolution, generation: usize) -> Result<()> {
        let canvas = evolution.best_canvas()?;
        let path = self
            .cli
            .output
            .join(format!("{SNAPSHOT_PREFIX}{generation}.png"));
        export_canvas_as_png(&canvas, &path)?;

        if let Some(ref mut capture) = self.capture {
            capture.record_snapshot(&canvas)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with(generations: usize, samples: usize) -> Cli {
        Cli {
            target: PathBuf::from("target.png"),
            tiles: PathBuf::from("tiles"),
            output: PathBuf::from("output"),
            population: 100,
            generations,
            samples,
            seed: DEFAULT_SEED,
            gif: false,
            quiet: true,
        }
    }

    #[test]
    fn test_snapshot_step_divides_run() {
        assert_eq!(cli_with(5000, 10).snapshot_step(), 500);
        assert_eq!(cli_with(100, 10).snapshot_step(), 10);
    }

    #[test]
    fn test_snapshot_step_never_zero() {
        assert_eq!(cli_with(5, 10).snapshot_step(), 1);
        assert_eq!(cli_with(100, 0).snapshot_step(), 100);
    }
}
