//! Terminal LED Dodge runner (default binary).
//!
//! Stands in for the physical board: arrow keys emulate the tilt sensor and
//! a crossterm renderer draws the 5x5 LED matrix. The host owns all timing;
//! the core only ever sees one `tick` call per time step.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use led_dodge::config::Config;
use led_dodge::core::{GameLoop, Icon, LatestFrame, SimpleRng};
use led_dodge::input::{is_restart, should_quit, TiltHandler};
use led_dodge::term::{grid_fingerprint, CellBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use led_dodge::types::{BrightnessGrid, GameStatus};

/// Repaint an unchanged screen at most this often.
const STATIC_REDRAW_MS: u64 = 250;

enum RoundEnd {
    Finished(GameStatus),
    Quit,
}

struct Screen {
    term: TerminalRenderer,
    view: GameView,
    cells: CellBuffer,
    throttle: RenderThrottle,
    started: Instant,
}

impl Screen {
    fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            cells: CellBuffer::new(0, 0),
            throttle: RenderThrottle::new(STATIC_REDRAW_MS),
            started: Instant::now(),
        }
    }

    fn draw(&mut self, grid: &BrightnessGrid, status: GameStatus) -> Result<()> {
        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self.throttle.should_render(now_ms, grid_fingerprint(grid, status)) {
            return Ok(());
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(grid, status, Viewport::new(w, h), &mut self.cells);
        self.term.present(&mut self.cells)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&args)?;
    info!("starting with {:?}", config);

    let mut screen = Screen::new();
    screen.term.enter()?;

    let result = run(&mut screen, &config);

    // Always try to restore terminal state.
    let _ = screen.term.exit();
    result
}

fn run(screen: &mut Screen, config: &Config) -> Result<()> {
    let mut seeds = SimpleRng::new(config.seed_or_clock());
    let mut tilt = TiltHandler::new().with_key_release_timeout_ms(config.tilt_hold_ms);
    let mut display = LatestFrame::default();

    loop {
        let seed = seeds.next_u32();
        info!("new round, seed {}", seed);

        tilt.reset();
        display.reset();
        let status = match play_round(screen, config, seed, &mut tilt, &mut display)? {
            RoundEnd::Finished(status) => status,
            RoundEnd::Quit => return Ok(()),
        };
        info!("round finished: {}", status.as_str());

        if !show_feedback(screen, status)? {
            return Ok(());
        }
    }
}

fn play_round(
    screen: &mut Screen,
    config: &Config,
    seed: u32,
    tilt: &mut TiltHandler,
    display: &mut LatestFrame,
) -> Result<RoundEnd> {
    let mut rng = SimpleRng::new(seed);
    let mut game = GameLoop::with_settings(config.settings(), &mut rng);

    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(RoundEnd::Quit);
                        }
                        tilt.handle_key_press(key);
                    }
                    KeyEventKind::Release => tilt.handle_key_release(key),
                },
                Event::Resize(..) => {
                    screen.term.invalidate();
                    screen.throttle.reset();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        let status = game.tick(tilt, display);
        if status.is_terminal() {
            return Ok(RoundEnd::Finished(status));
        }
        screen.draw(display.grid(), status)?;
    }
}

/// Show the end-of-round icon, then wait for restart or quit.
///
/// Restart is ignored while the icon's display time runs, like the board
/// pausing on the picture. Returns `true` when another round was requested.
fn show_feedback(screen: &mut Screen, status: GameStatus) -> Result<bool> {
    let Some(icon) = Icon::for_status(status) else {
        return Ok(true);
    };
    let picture = icon.frame();
    let shown_at = Instant::now();
    let hold = Duration::from_millis(icon.display_ms());

    loop {
        screen.draw(picture.grid(), status)?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(false);
                    }
                    if is_restart(key) && shown_at.elapsed() >= hold {
                        screen.throttle.reset();
                        return Ok(true);
                    }
                }
                Event::Resize(..) => {
                    screen.term.invalidate();
                    screen.throttle.reset();
                }
                _ => {}
            }
        }
    }
}
