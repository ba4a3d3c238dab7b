//! Generation progress display for a single evolution run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Generations: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking generations and the best fitness found so far
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a progress bar spanning the configured generation count
    pub fn new(generations: usize) -> Self {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        Self { bar }
    }

    /// Report a completed generation and its best fitness
    pub fn update(&self, generation: usize, best_fitness: f64) {
        self.bar.set_position(generation as u64);
        self.bar.set_message(format!("best {best_fitness:.2}"));
    }

    /// Finish the bar with the final best fitness
    pub fn finish(&self, best_fitness: f64) {
        self.bar
            .finish_with_message(format!("best {best_fitness:.2}"));
    }
}
