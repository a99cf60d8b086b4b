//! Terminal tower-crane runner (default binary).
//!
//! Drives the engine from a fixed-timestep loop: crossterm input is polled
//! with the time left until the next tick, a drop key press is latched and
//! handed to the next `tick`, and a snapshot is rendered between ticks.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use log::{info, LevelFilter};

use tower_crane::config::{parse_args, RunConfig, USAGE};
use tower_crane::core::{GameSnapshot, GameState};
use tower_crane::input::{map_event, DropLatch, InputEvent};
use tower_crane::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tower_crane::types::{GameAction, StateChangeNotice};

/// Redraw an unchanged screen at least this often.
const REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args, RunConfig::from_env())? else {
        print!("{}", USAGE);
        return Ok(());
    };

    init_logging(&config)?;
    info!(
        "starting: seed={} tick_ms={}",
        config.seed, config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let won = result?;
    info!("exiting: won={}", won);
    if won {
        println!("You won!");
    }
    Ok(())
}

/// Log to a file only: stderr shares the terminal with the alternate screen.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("tower_crane_core", LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Run until the player quits. Returns whether the game was won at that point.
fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<bool> {
    let mut game = GameState::new(config.seed);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();
    let mut drop = DropLatch::new();

    loop {
        // Render between ticks only.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        let fingerprint = snap.fingerprint() ^ ((w as u64) << 48) ^ ((h as u64) << 32);
        if throttle.should_render(now_ms(started), fingerprint) {
            GameView::fit(viewport).render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                Some(InputEvent::Quit) => {
                    info!(
                        "quit: {} frames drawn, {} skipped",
                        term.frames(),
                        throttle.skipped()
                    );
                    return Ok(game.won());
                }
                Some(InputEvent::Action(GameAction::Drop)) => drop.press(),
                Some(InputEvent::Action(action @ GameAction::Restart)) => {
                    game.apply_action(action);
                    drop.clear();
                }
                Some(InputEvent::Resize(_, _)) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                None => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let steps = (elapsed.as_millis() / tick_duration.as_millis().max(1)) as u32;
            last_tick += tick_duration * steps;

            let notice = game.tick(steps, drop.take(), now_ms(started));
            if notice == StateChangeNotice::Won {
                info!(
                    "won after {} ticks ({} perfect, {} acceptable, {} misses)",
                    game.ticks(),
                    game.perfect_hits(),
                    game.acceptable_hits(),
                    game.total_misses()
                );
            }
        }
    }
}

fn now_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
