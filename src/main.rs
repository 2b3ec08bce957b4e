//! Terminal runner (default binary).
//!
//! Reads the configuration, sets up logging, then drives one [`GameLoop`] from
//! crossterm key events and a fixed frame tick. The terminal is restored on
//! every exit path.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_blocks::core::{GameSnapshot, GameState, Shape, SimpleRng};
use tui_blocks::engine::{GameLoop, LoopMessage, Observer};
use tui_blocks::input::{map_key, should_quit, InputHandler};
use tui_blocks::term::{FrameBuffer, GameView, HudState, TerminalRenderer, Viewport};
use tui_blocks::types::{GameConfig, PieceKind};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file. Missing fields take their default values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Board width in cells (overrides the config file).
    #[arg(long)]
    width: Option<u16>,
    /// Board height in cells (overrides the config file).
    #[arg(long)]
    height: Option<u16>,
    /// Gravity interval in milliseconds (overrides the config file).
    #[arg(long)]
    drop_ms: Option<u32>,
    /// Seed for the piece generator; defaults to the current time.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
    /// Write log records to this file (the terminal is busy drawing the game).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = load_config(&args)?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!("seed {}, config {:?}", seed, config);
    let state = GameState::new(&config, SimpleRng::new(seed))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(width) = args.width {
        config.board_width = width;
    }
    if let Some(height) = args.height {
        config.board_height = height;
    }
    if let Some(drop_ms) = args.drop_ms {
        config.drop_interval_ms = drop_ms;
    }

    config.validate()?;
    Ok(config)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Draws frames and keeps the display-only state the session does not own.
struct Frontend<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    hud: HudState,
    error: Option<anyhow::Error>,
}

impl Observer for Frontend<'_> {
    fn frame(&mut self, snapshot: &GameSnapshot) {
        if self.error.is_some() {
            return;
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, &self.hud, Viewport::new(w, h), &mut self.fb);
        if let Err(err) = self.term.present(&mut self.fb) {
            self.error = Some(err);
        }
    }

    fn next_piece(&mut self, _kind: PieceKind, shape: &Shape) {
        self.hud.preview = Some(*shape);
    }

    fn game_over(&mut self, final_score: u32) {
        self.hud.show_game_over(final_score);
    }
}

fn run(term: &mut TerminalRenderer, state: GameState, config: &GameConfig) -> Result<()> {
    let mut input = InputHandler::from_config(config);
    match term.enable_key_release_events() {
        Ok(true) => input = input.with_key_release_timeout_ms(0),
        Ok(false) => {}
        Err(err) => warn!("keyboard enhancement query failed: {}", err),
    }

    let mut game = GameLoop::new(state);
    let mut frontend = Frontend {
        term,
        view: GameView::default(),
        fb: FrameBuffer::new(0, 0),
        hud: HudState::default(),
        error: None,
    };
    game.start(&mut frontend);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit requested, score {}", game.state().score());
                            return Ok(());
                        }
                        if let Some(action) = map_key(key).and_then(|k| input.press(k)) {
                            game.post(LoopMessage::Action(action));
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(k) = map_key(key) {
                            input.release(k);
                        }
                    }
                },
                Event::Resize(..) => frontend.term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
            last_tick = Instant::now();

            for action in input.update(elapsed_ms) {
                game.post(LoopMessage::Action(action));
            }
            frontend.hud.advance(elapsed_ms);
            game.post(LoopMessage::Frame { elapsed_ms });
        }

        game.pump(&mut frontend);
        if let Some(err) = frontend.error.take() {
            return Err(err);
        }
    }
}
