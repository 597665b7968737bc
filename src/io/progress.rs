//! Progress display for batch map generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maps of a batch have been generated
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            total: 0,
        }
    }

    /// Start a bar for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        self.total = map_count;
        self.completed = 0;
        let bar = ProgressBar::new(map_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show which seed is being generated
    pub fn start_map(&self, seed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed}"));
        }
    }

    /// Mark one map as written
    pub fn complete_map(&mut self, elapsed: Duration) {
        self.completed = (self.completed + 1).min(self.total);
        if let Some(ref bar) = self.bar {
            bar.set_position(self.completed as u64);
            bar.set_message(format!("last map {:.1}ms", elapsed.as_secs_f64() * 1000.0));
        }
    }

    /// Maps completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All maps generated");
        }
    }
}
