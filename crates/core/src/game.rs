//! Game loop module - one round of LED Dodge
//!
//! Ties together the player, the scrolling course and the composed frame.
//! The host calls [`GameLoop::tick`] once per time step; the loop never
//! sleeps and never touches hardware itself.
//!
//! Each tick, in order:
//!
//! 1. On player action ticks, sample the tilt sensor and move the player.
//!    The axes are inverted: tilting the logo up moves the token down.
//! 2. On scroll action ticks, test the player against the frame composed on
//!    the *previous* tick, then either finish the course or scroll one row.
//! 3. Compose the new frame (binarized window + player light) and show it.

use log::{debug, trace};

use crate::frame::FrameBuffer;
use crate::player::Player;
use crate::ports::{DisplaySink, InputSource};
use crate::rng::{RandomSource, SimpleRng};
use crate::scroll::ScrollEngine;
use crate::types::{GameStatus, Tilt, PLAYER_ACTION_PERIOD, PLAYER_BRIGHTNESS, STAGE_ACTION_PERIOD};

/// Tunables for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub player_period: u32,
    pub stage_period: u32,
    pub player_brightness: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_period: PLAYER_ACTION_PERIOD,
            stage_period: STAGE_ACTION_PERIOD,
            player_brightness: PLAYER_BRIGHTNESS,
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameLoop {
    player: Player,
    stage: ScrollEngine,
    /// Frame composed on the most recent rendered tick.
    screen: FrameBuffer,
    tick: u64,
    status: GameStatus,
}

impl GameLoop {
    /// Create a round with default settings and a course from `seed`
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_settings(GameSettings::default(), &mut rng)
    }

    /// Create a round whose course is generated from `rng`
    pub fn with_settings<R: RandomSource + ?Sized>(settings: GameSettings, rng: &mut R) -> Self {
        Self::with_field::<Vec<u8>, R>(settings, None, rng)
    }

    /// Create a round over a supplied course, falling back to a generated
    /// one when the course fails validation.
    pub fn with_field<S, R>(settings: GameSettings, supplied: Option<&[S]>, rng: &mut R) -> Self
    where
        S: AsRef<[u8]>,
        R: RandomSource + ?Sized,
    {
        let player = Player::with_settings(settings.player_period, settings.player_brightness);
        let stage = ScrollEngine::new(supplied, rng).with_action_period(settings.stage_period);
        Self::from_parts(player, stage)
    }

    pub fn from_parts(player: Player, stage: ScrollEngine) -> Self {
        debug!(
            "new round: {} rows, player period {}, stage period {}",
            stage.len(),
            player.action_period(),
            stage.action_period()
        );
        Self {
            player,
            stage,
            screen: FrameBuffer::new(),
            tick: 0,
            status: GameStatus::Running,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of completed running ticks
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stage(&self) -> &ScrollEngine {
        &self.stage
    }

    /// Frame shown on the most recent rendered tick
    pub fn frame(&self) -> &FrameBuffer {
        &self.screen
    }

    #[cfg(test)]
    pub(crate) fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.screen
    }

    /// Advance the round by one tick.
    ///
    /// Once the round is won or lost this is a no-op: no input is read and
    /// nothing is rendered.
    pub fn tick<I, D>(&mut self, input: &mut I, display: &mut D) -> GameStatus
    where
        I: InputSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.status.is_terminal() {
            return self.status;
        }

        let n = self.tick;

        if self.player.sample_action_tick(n) {
            match input.sample() {
                Tilt::Up => self.player.move_down(),
                Tilt::Down => self.player.move_up(),
                Tilt::None => {}
            }
        }

        if self.stage.sample_action_tick(n) {
            let lane = self.player.lane() as usize;
            // Previous tick's frame, not the window we are about to compose.
            let lit = self.screen.get(0, lane).unwrap_or(0);
            if self.player.brightness() < lit {
                return self.finish(GameStatus::Lost);
            }
            if self.stage.is_finished() {
                return self.finish(GameStatus::Won);
            }
            self.stage.advance();
            trace!("tick {}: scrolled to row {}", n, self.stage.cursor());
        }

        self.screen = self.stage.obstacle_frame();
        self.screen.put_brightness(
            0,
            self.player.lane() as usize,
            self.player.brightness(),
        );
        self.screen.render(display);

        self.tick += 1;
        self.status
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        debug!(
            "round over at tick {}: {} (lane {}, row {} of {})",
            self.tick,
            status.as_str(),
            self.player.lane(),
            self.stage.cursor(),
            self.stage.len()
        );
        self.status = status;
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::LatestFrame;
    use crate::stage::add_margins;
    use crate::types::{BrightnessGrid, Row};

    fn level() -> impl FnMut() -> Tilt {
        || Tilt::None
    }

    fn open_course(rows: usize) -> ScrollEngine {
        ScrollEngine::from_field(add_margins(&vec![[0; 5]; rows]))
    }

    struct Recorder(Vec<BrightnessGrid>);

    impl DisplaySink for Recorder {
        fn show(&mut self, grid: &BrightnessGrid) {
            self.0.push(*grid);
        }
    }

    #[test]
    fn test_new_round() {
        let game = GameLoop::new(1);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.player().lane(), 2);
        assert_eq!(game.stage().cursor(), 0);
        assert_eq!(game.frame(), &FrameBuffer::new());
    }

    #[test]
    fn test_same_seed_same_course() {
        let a = GameLoop::new(777);
        let b = GameLoop::new(777);
        assert_eq!(a.stage().field(), b.stage().field());
    }

    #[test]
    fn test_first_tick_scrolls_and_renders() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(12));
        let mut sink = LatestFrame::default();

        assert_eq!(game.tick(&mut level(), &mut sink), GameStatus::Running);
        assert_eq!(game.stage().cursor(), 1, "tick 0 is a scroll action tick");
        assert_eq!(game.tick_count(), 1);
        assert_eq!(sink.frames(), 1);
        assert_eq!(sink.grid()[0][2], 128);
    }

    #[test]
    fn test_input_only_read_on_player_ticks() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(40));
        let mut reads = 0u32;
        let mut input = || {
            reads += 1;
            Tilt::None
        };
        let mut sink = LatestFrame::default();

        for _ in 0..101 {
            game.tick(&mut input, &mut sink);
        }
        // Ticks 0, 50 and 100.
        assert_eq!(reads, 3);
    }

    #[test]
    fn test_tilt_axes_are_inverted() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(40));
        let mut sink = LatestFrame::default();

        game.tick(&mut || Tilt::Up, &mut sink);
        assert_eq!(game.player().lane(), 3, "tilt up moves the token down");

        for _ in 1..50 {
            game.tick(&mut level(), &mut sink);
        }
        game.tick(&mut || Tilt::Down, &mut sink);
        assert_eq!(game.player().lane(), 2, "tilt down moves the token up");
    }

    #[test]
    fn test_collision_uses_previous_frame() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(40));
        let mut sink = LatestFrame::default();
        game.frame_mut().put(0, 2);

        assert_eq!(game.tick(&mut level(), &mut sink), GameStatus::Lost);
        assert_eq!(sink.frames(), 0, "the losing tick renders nothing");
    }

    #[test]
    fn test_equal_brightness_is_not_a_collision() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(40));
        let mut sink = LatestFrame::default();
        game.frame_mut().put_brightness(0, 2, 128);

        assert_eq!(game.tick(&mut level(), &mut sink), GameStatus::Running);
    }

    #[test]
    fn test_terminal_status_is_sticky() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(40));
        let mut sink = LatestFrame::default();
        game.frame_mut().put(0, 2);
        game.tick(&mut level(), &mut sink);

        let mut reads = 0u32;
        let mut input = || {
            reads += 1;
            Tilt::Up
        };
        for _ in 0..500 {
            assert_eq!(game.tick(&mut input, &mut sink), GameStatus::Lost);
        }
        assert_eq!(reads, 0);
        assert_eq!(sink.frames(), 0);
        assert_eq!(game.tick_count(), 0);
    }

    #[test]
    fn test_empty_course_is_won() {
        let mut game = GameLoop::from_parts(Player::new(), open_course(8));
        let mut sink = Recorder(Vec::new());

        let mut status = GameStatus::Running;
        let mut ticks = 0u64;
        while status == GameStatus::Running {
            status = game.tick(&mut level(), &mut sink);
            ticks += 1;
        }
        assert_eq!(status, GameStatus::Won);
        // 23 rows: finished at cursor 13, reached after 13 scroll steps.
        assert_eq!(game.stage().cursor(), 13);
        assert_eq!(ticks, 13 * 150 + 1);
        assert!(sink.0.iter().all(|g| g[0][2] == 128));
    }

    #[test]
    fn test_wall_in_lane_is_lost() {
        // A full wall on row 7 reaches column 0 once the cursor is 7.
        let mut body: Vec<Row> = vec![[0; 5]; 8];
        body[2] = [1; 5];
        let mut game = GameLoop::from_parts(Player::new(), ScrollEngine::from_field(add_margins(&body)));
        let mut sink = LatestFrame::default();

        let mut status = GameStatus::Running;
        while status == GameStatus::Running {
            status = game.tick(&mut level(), &mut sink);
        }
        assert_eq!(status, GameStatus::Lost);
        assert_eq!(game.stage().cursor(), 7);
        assert_eq!(sink.grid()[0], [255; 5], "the last shown frame has the wall over the player");
    }

    #[test]
    fn test_settings_flow_into_round() {
        let settings = GameSettings {
            player_period: 10,
            stage_period: 30,
            player_brightness: 200,
        };
        let mut rng = SimpleRng::new(3);
        let game = GameLoop::with_settings(settings, &mut rng);
        assert_eq!(game.player().action_period(), 10);
        assert_eq!(game.player().brightness(), 200);
        assert_eq!(game.stage().action_period(), 30);
    }
}
