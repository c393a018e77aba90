//! Terminal blockfall runner (default binary).
//!
//! The driver owns the loop: render the current snapshot, poll input with a
//! timeout, apply actions, then feed the engine a frame delta. The engine
//! itself never schedules anything.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{FrameClock, Game, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        ^ std::process::id();
    let mut game = Game::new(seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    let mut snapshot = GameSnapshot::default();

    let start = Instant::now();
    let mut clock = FrameClock::new();
    let frame = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame boundary.
        let frame_start = Instant::now();
        loop {
            let timeout = frame
                .checked_sub(frame_start.elapsed())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
        }

        // Tick with the observed frame delta.
        let delta = clock.delta_ms(start.elapsed().as_millis() as u64);
        game.tick(delta);
    }
}
