//! Terminal blockfall runner (default binary).
//!
//! Owns the things the engine deliberately does not: the clock, the
//! keyboard, pause/restart, and leaderboard persistence. The engine is
//! stepped with real elapsed time once per tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, EngineConfig, RandomizerPolicy, MAX_BOARD_DIM, MAX_SHAPE_DIM};
use blockfall::input::{intent_for_key, should_pause, should_quit, should_restart, InputHandler};
use blockfall::scores::{ScoreEntry, ScoreTable};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Intent, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling pieces in your terminal")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 10)]
    width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = 20)]
    height: u8,

    /// RNG seed; defaults to the system clock
    #[arg(long)]
    seed: Option<u32>,

    /// Piece sequence policy
    #[arg(long, value_enum, default_value = "bag")]
    randomizer: RandomizerArg,

    /// Name recorded on the leaderboard
    #[arg(long, default_value = "player")]
    name: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RandomizerArg {
    Bag,
    Uniform,
}

impl From<RandomizerArg> for RandomizerPolicy {
    fn from(arg: RandomizerArg) -> Self {
        match arg {
            RandomizerArg::Bag => RandomizerPolicy::Bag,
            RandomizerArg::Uniform => RandomizerPolicy::Uniform,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let dims = MAX_SHAPE_DIM..=MAX_BOARD_DIM;
    if !dims.contains(&args.width) || !dims.contains(&args.height) {
        anyhow::bail!(
            "board dimensions must be between {MAX_SHAPE_DIM} and {MAX_BOARD_DIM}, got {}x{}",
            args.width,
            args.height
        );
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = EngineConfig {
        cols: args.width,
        rows: args.height,
        policy: args.randomizer.into(),
        seed,
        ..EngineConfig::default()
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, &args.name);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: EngineConfig, player: &str) -> Result<()> {
    let mut engine = Engine::new(config);
    engine.start();

    let view = GameView::default();
    let mut input_handler = InputHandler::new();
    let mut scores = ScoreTable::load();

    let mut paused = false;
    let mut score_recorded = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&engine, paused, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if should_pause(key) && !engine.game_over() {
                            paused = !paused;
                            input_handler.reset();
                            continue;
                        }
                        if should_restart(key) {
                            engine.reset();
                            input_handler.reset();
                            paused = false;
                            score_recorded = false;
                            continue;
                        }
                        if paused {
                            continue;
                        }

                        // Movement keys go through the repeat handler so a
                        // held key only fires once here; everything else is
                        // a one-shot intent.
                        if let Some(intent) = intent_for_key(key) {
                            match intent {
                                Intent::MoveLeft | Intent::MoveRight | Intent::SoftDrop => {
                                    if let Some(intent) =
                                        input_handler.handle_key_press(key.code)
                                    {
                                        engine.apply_intent(intent);
                                    }
                                }
                                _ => {
                                    engine.apply_intent(intent);
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if !paused {
                for intent in input_handler.update(TICK_MS) {
                    engine.apply_intent(intent);
                }
                engine.step(TICK_MS);
            }

            if engine.game_over() && !score_recorded {
                score_recorded = true;
                scores.record(ScoreEntry {
                    name: player.to_string(),
                    score: engine.score(),
                    lines: engine.lines(),
                    level: engine.level(),
                });
                // Best effort; an unwritable config dir should not kill
                // the session.
                let _ = scores.save();
            }
        }
    }
}
