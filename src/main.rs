use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::config::GameConfig;
use flappy::core::constants::{ASSET_DIR, CONFIG_FILE, LOG_FILE, STORAGE_FILE};
use flappy::core::events::log_events;
use flappy::core::game_loop::GameContext;
use flappy::game::ScoreTracker;
use flappy::input::{map_key, GameInput};
use flappy::logging;
use flappy::render::assets::AssetStore;
use flappy::ui::draw_game;
use flappy::utils::persistence::{config_dir, data_dir};
use flappy::utils::storage::{FileStorage, MemoryStorage, Storage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// What the command line asked for.
enum Command {
    Play { seed: Option<u64> },
    ResetBest,
    PrintConfig,
}

fn print_help() {
    println!("Flappy - Flappy Bird in the terminal\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <N>      Use a fixed seed for pipe placement");
    println!("  --reset-best    Forget the stored best score and exit");
    println!("  --print-config  Print the effective configuration as JSON and exit");
    println!("  --version       Show version information");
    println!("  --help          Show this help message");
    println!("\nControls: Space/Enter/Up to flap, q/Esc to quit.");
    println!("Set FLAPPY_LOG (e.g. FLAPPY_LOG=debug) to change the log level.");
}

fn parse_args(args: &[String]) -> Command {
    let mut command = Command::Play { seed: None };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => command = Command::Play { seed: Some(seed) },
                _ => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--reset-best" => command = Command::ResetBest,
            "--print-config" => command = Command::PrintConfig,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    command
}

/// Best-score storage in the data directory, or memory if there is none.
fn open_storage() -> Box<dyn Storage> {
    match data_dir() {
        Ok(dir) => Box::new(FileStorage::open(dir.join(STORAGE_FILE))),
        Err(e) => {
            log::warn!("No data directory ({}); best score will not be saved", e);
            Box::new(MemoryStorage::new())
        }
    }
}

fn load_config(config_dir: Option<&Path>) -> GameConfig {
    match config_dir {
        Some(dir) => GameConfig::load_or_default(&dir.join(CONFIG_FILE)),
        None => GameConfig::default(),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let command = parse_args(&args);

    if let Ok(dir) = data_dir() {
        logging::init(&dir.join(LOG_FILE));
    }

    let config_dir = match config_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::warn!("No config directory: {}", e);
            None
        }
    };
    let config = load_config(config_dir.as_deref());

    let seed = match command {
        Command::PrintConfig => {
            let json = serde_json::to_string_pretty(&config).map_err(io::Error::other)?;
            println!("{}", json);
            return Ok(());
        }
        Command::ResetBest => {
            let mut score = ScoreTracker::new(open_storage());
            score.clear_best();
            println!("Best score cleared.");
            return Ok(());
        }
        Command::Play { seed } => seed,
    };

    let mut rng = match seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut assets = AssetStore::load_in_background(config_dir.map(|dir| dir.join(ASSET_DIR)));
    let mut ctx = GameContext::new(config, open_storage());
    log::info!("Best score so far: {}", ctx.score.best());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut ctx, &mut assets, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    ctx.score.commit_best();
    log::info!("Exiting with best score {}", ctx.score.best());
    result
}

/// Frame loop: update, draw, advance, then read input until the next frame.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ctx: &mut GameContext,
    assets: &mut AssetStore,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_time = Duration::from_millis(ctx.config.frame_ms);

    loop {
        let frame_start = Instant::now();

        assets.poll();
        let events = ctx.update(rng);
        log_events(&events);

        terminal.draw(|frame| draw_game(frame, ctx, assets))?;
        ctx.advance_frame();

        loop {
            let remaining = frame_time.saturating_sub(frame_start.elapsed());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    GameInput::Action => log_events(&ctx.handle_action()),
                    GameInput::Quit => return Ok(()),
                    GameInput::Other => {}
                }
            }
        }
    }
}
