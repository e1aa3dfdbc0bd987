#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grid_life::board::{Board, BoardError, load_pattern, random_board};
use grid_life::render::{PlainRenderer, RenderConfig, Renderer, TerminalRenderer, frame_size};
use grid_life::{ParallelStepper, Simulation, SimulationConfig, StepperConfig};
use rand::SeedableRng;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid-life")]
#[command(version, about = "Conway's Game of Life on a bounded board in the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(short, long, default_value_t = 30)]
    width: usize,

    /// Board length (rows) in cells
    #[arg(short, long, default_value_t = 30)]
    length: usize,

    /// Probability of each random cell starting alive
    #[arg(long, default_value_t = 0.3)]
    prob: f64,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u64>,

    /// Text file of 0/1 rows to start from instead of a random board
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Horizontal repeat of each rendered cell
    #[arg(long, default_value_t = 2)]
    scale: usize,

    /// Pause after each frame, in seconds
    #[arg(long, default_value = "0.1", value_parser = parse_seconds)]
    sleep: Duration,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Keep running through fixed points and 2-cycles
    #[arg(long)]
    keep_running: bool,

    /// Step rows on this many threads
    #[arg(long)]
    threads: Option<usize>,

    /// Render without colours or screen clearing
    #[arg(long)]
    plain: bool,
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{s} is not a usable delay: {e}"))
}

fn random_start(cli: &Cli) -> Result<Board> {
    let board = match cli.seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            random_board(cli.width, cli.length, cli.prob, &mut rng)
        }
        None => random_board(cli.width, cli.length, cli.prob, &mut rand::rng()),
    };
    board.context("failed to generate a random board")
}

fn initial_board(cli: &Cli) -> Result<Board> {
    let Some(path) = &cli.pattern else {
        return random_start(cli);
    };
    match load_pattern(path) {
        Ok(board) => Ok(board),
        Err(BoardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "pattern file does not exist, using a random board");
            random_start(cli)
        }
        Err(err) => Err(err).context("failed to load pattern"),
    }
}

/// Fails when a frame of `frame` (columns, lines) would not fit a terminal
/// of `terminal` (columns, lines).
fn check_terminal_fits(frame: (usize, usize), terminal: (u16, u16)) -> Result<()> {
    let (width, height) = frame;
    let (cols, lines) = (usize::from(terminal.0), usize::from(terminal.1));
    if width > cols || height > lines {
        bail!(
            "a {width}x{height} frame does not fit the {cols}x{lines} terminal. \
             Enlarge the terminal window or choose smaller dimensions"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let board = initial_board(&cli)?;

    let mut sim_config = SimulationConfig::default().detect_halt(!cli.keep_running);
    if let Some(max) = cli.max_generations {
        sim_config = sim_config.max_generations(max);
    }
    let mut sim = Simulation::with_config(board, sim_config);
    if let Some(threads) = cli.threads {
        let stepper = ParallelStepper::with_config(StepperConfig::default().thread_count(threads))
            .context("failed to build stepper thread pool")?;
        sim = sim.with_stepper(stepper);
    }

    let render_config = RenderConfig::default().scale(cli.scale).delay(cli.sleep);
    let mut renderer: Box<dyn Renderer> = if cli.plain {
        Box::new(PlainRenderer::new(
            io::stdout(),
            render_config.glyphs('#', ' ').clear(false),
        ))
    } else {
        match crossterm::terminal::size() {
            Ok(size) => check_terminal_fits(frame_size(sim.board(), &render_config), size)?,
            Err(err) => debug!(%err, "terminal size unavailable, skipping fit check"),
        }
        Box::new(TerminalRenderer::stdout(render_config))
    };

    let summary = sim
        .run(renderer.as_mut())
        .context("failed to render board")?;
    println!(
        "stopped after {} generations ({:?}), population {}",
        summary.generations, summary.halt, summary.population
    );
    Ok(())
}
