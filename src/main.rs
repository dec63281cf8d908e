use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::apple::SpawnPolicy;
use grid_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameConfig, GridSize,
    INITIAL_BODY_PARTS, MAX_GRID_EDGE, MAX_TICK_INTERVAL_MS, MIN_GRID_EDGE, MIN_TICK_INTERVAL_MS,
    THEME_MEADOW,
};
use grid_snake::error::Result;
use grid_snake::game::{Control, GameState, Mode, TickEvent};
use grid_snake::input::{InputHandler, KeyAction};
use grid_snake::logging::{LogLevel, init_file_logger};
use grid_snake::renderer;
use grid_snake::score::ScoreStore;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::ui::hud::HudInfo;
use log::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in tiles.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_EDGE)))]
    width: u16,

    /// Board height in tiles.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_EDGE)))]
    height: u16,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS,
          value_parser = clap::value_parser!(u64).range(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS))]
    tick_ms: u64,

    /// Seed apple placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Never spawn an apple under the snake.
    #[arg(long = "avoid-snake")]
    avoid_snake: bool,

    /// Do not read or write the best-score file.
    #[arg(long = "no-save")]
    no_save: bool,

    /// Write a log to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity, used with --log-file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid: GridSize {
                width: self.width,
                height: self.height,
            },
            initial_length: INITIAL_BODY_PARTS,
            spawn_policy: if self.avoid_snake {
                SpawnPolicy::AvoidSnake
            } else {
                SpawnPolicy::Anywhere
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let store = if cli.no_save {
        ScoreStore::disabled()
    } else {
        ScoreStore::platform_default()
    };
    let best_score = match store.load() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Warning: {error}; starting with a best score of 0");
            warn!("{error}");
            0
        }
    };

    let config = cli.game_config();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    info!(
        "session start: {}x{} grid, {} ms ticks, {:?} apples",
        config.grid.width, config.grid.height, cli.tick_ms, config.spawn_policy
    );

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    game_loop(
        &mut session,
        state,
        &store,
        best_score,
        Duration::from_millis(cli.tick_ms),
    )
}

fn game_loop(
    session: &mut TerminalSession,
    mut state: GameState,
    store: &ScoreStore,
    mut best_score: u32,
    tick_interval: Duration,
) -> Result<()> {
    let mut input = InputHandler::new();
    let mut previous_best = best_score;
    let mut last_tick = Instant::now();

    loop {
        let hud_info = HudInfo {
            best_score,
            previous_best,
            theme: &THEME_MEADOW,
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &hud_info))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(action) = input.poll(timeout, state.mode)? {
            let mode_before = state.mode;
            let control = match action {
                KeyAction::ForceQuit => Control::Exit,
                KeyAction::Intent(intent) => state.apply_input(intent),
            };
            if control == Control::Exit {
                info!("exit requested");
                break;
            }

            if state.mode == Mode::Running && mode_before != Mode::Running {
                // The tick clock only runs while playing.
                last_tick = Instant::now();
                if mode_before != Mode::Paused {
                    previous_best = best_score;
                }
            }
        }

        if last_tick.elapsed() < tick_interval {
            continue;
        }
        last_tick = Instant::now();

        if let TickEvent::Crashed(_) = state.advance() {
            if state.score > best_score {
                best_score = state.score;
                if let Err(error) = store.save(best_score) {
                    warn!("{error}");
                }
            }
        }
    }

    Ok(())
}
