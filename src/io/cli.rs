//! Command-line interface for batch map generation

use crate::io::configuration::{
    DEFAULT_BIG_AREA_CUTOFF, DEFAULT_CAVE_V2_FILL_PROBABILITY, DEFAULT_FILL_PROBABILITY,
    DEFAULT_HEIGHT, DEFAULT_MAP_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_TOTAL_ITERATIONS,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, STAGES_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::StageCapture;
use crate::math::random::seeded;
use crate::spatial::grid::Grid;
use crate::strategy::{
    CaveStrategy, CaveV2Strategy, DepthFirstMazeStrategy, MapCreationStrategy, PrimsMazeStrategy,
};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map generator selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Cellular automaton cave with big-area and nearest-neighbor rules
    Cave,
    /// Half-scale cellular automaton cave, upscaled and smoothed
    Cave2,
    /// Randomized Prim's maze
    Prims,
    /// Depth-first backtracking maze
    Dfs,
}

impl StrategyKind {
    /// Short name used in file names and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cave => "cave",
            Self::Cave2 => "cave2",
            Self::Prims => "prims",
            Self::Dfs => "dfs",
        }
    }

    /// Fill probability used when none is given
    pub const fn default_fill_probability(self) -> usize {
        match self {
            Self::Cave2 => DEFAULT_CAVE_V2_FILL_PROBABILITY,
            Self::Cave | Self::Prims | Self::Dfs => DEFAULT_FILL_PROBABILITY,
        }
    }
}

#[derive(Parser)]
#[command(name = "mapcarve")]
#[command(author, version, about = "Generate connected cave and maze maps")]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Generation algorithm
    #[arg(long, value_enum, default_value_t = StrategyKind::Cave)]
    pub strategy: StrategyKind,

    /// Map width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed of the first map
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Percent chance of an interior cell starting as floor (cave strategies)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fill: Option<u8>,

    /// Automaton iterations (cave strategy)
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_ITERATIONS)]
    pub iterations: usize,

    /// Iteration at which the big-area rule stops (cave strategy)
    #[arg(short, long, default_value_t = DEFAULT_BIG_AREA_CUTOFF)]
    pub cutoff: usize,

    /// Number of maps to generate with consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Directory receiving the generated images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also export every generation stage as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Print each map as text to stdout
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Fill probability for the selected strategy
    pub fn fill_probability(&self) -> usize {
        self.fill
            .map_or_else(|| self.strategy.default_fill_probability(), usize::from)
    }
}

/// Install the stderr log subscriber, honoring `RUST_LOG`
///
/// Returns false when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

/// Orchestrates generation and export of a batch of maps
pub struct MapGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested map and return the written PNG paths
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy rejects its parameters or an export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for offset in 0..self.cli.count as u64 {
            let seed = self.cli.seed.wrapping_add(offset);
            written.push(self.process_seed(seed)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn process_seed(&mut self, seed: u64) -> Result<PathBuf> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_map(seed);
        }

        let mut capture = self.cli.visualize.then(StageCapture::new);
        let map = self.build_map(seed, capture.as_mut())?;

        let output_path = self.output_path(seed);
        export_map_as_png(&map, &output_path)?;

        if let Some(capture) = capture {
            capture.export_gif(&self.stages_path(seed), GIF_FRAME_DELAY_MS)?;
        }

        if self.cli.ascii {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output_path.display())?;
            write!(stdout, "{map}")?;
        }

        info!(
            seed,
            walkable = map.walkable_count(),
            path = %output_path.display(),
            "wrote map"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(start_time.elapsed());
        }

        Ok(output_path)
    }

    /// Generate a single map for `seed`, recording stages into `capture`
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy rejects the configured parameters
    pub fn build_map(&self, seed: u64, capture: Option<&mut StageCapture>) -> Result<Grid> {
        let rng = seeded(seed);
        let (width, height) = (self.cli.width, self.cli.height);

        match self.cli.strategy {
            StrategyKind::Cave => run_strategy(
                CaveStrategy::new(
                    width,
                    height,
                    self.cli.fill_probability(),
                    self.cli.iterations,
                    self.cli.cutoff,
                    rng,
                )?,
                capture,
            ),
            StrategyKind::Cave2 => run_strategy(
                CaveV2Strategy::new(width, height, self.cli.fill_probability(), rng)?,
                capture,
            ),
            StrategyKind::Prims => run_strategy(PrimsMazeStrategy::new(width, height, rng), capture),
            StrategyKind::Dfs => {
                run_strategy(DepthFirstMazeStrategy::new(width, height, rng), capture)
            }
        }
    }

    /// Path of the PNG written for `seed`
    pub fn output_path(&self, seed: u64) -> PathBuf {
        Self::file_in(
            &self.cli.output,
            &format!("{}_{seed}.png", self.cli.strategy.name()),
        )
    }

    /// Path of the stage animation written for `seed`
    pub fn stages_path(&self, seed: u64) -> PathBuf {
        Self::file_in(
            &self.cli.output,
            &format!("{}_{seed}{STAGES_SUFFIX}.gif", self.cli.strategy.name()),
        )
    }

    fn file_in(directory: &Path, name: &str) -> PathBuf {
        directory.join(name)
    }
}

fn run_strategy<S>(mut strategy: S, mut capture: Option<&mut StageCapture>) -> Result<Grid>
where
    S: MapCreationStrategy<Grid>,
{
    strategy.create_map_observed(&mut |stage, map| {
        if let Some(capture) = capture.as_mut() {
            capture.record(stage, map);
        }
    })
}
