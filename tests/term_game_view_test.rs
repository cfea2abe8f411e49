use led_dodge::core::{GameLoop, Icon, LatestFrame};
use led_dodge::term::{AnchorY, CellBuffer, GameView, Viewport};
use led_dodge::types::{GameStatus, Tilt, EMPTY_GRID};

fn screen_text(fb: &CellBuffer) -> String {
    fb.to_text()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // LED pixels = 5*2 by 5*1 => 10x5
    // plus border => 12x7, plus status and hint lines => 12x9
    assert_eq!(view.frame_size(), (12, 7));
    let fb = view.render(&EMPTY_GRID, GameStatus::Running, Viewport::new(12, 9));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_player_in_first_column() {
    let mut game = GameLoop::new(1);
    let mut display = LatestFrame::default();
    game.tick(&mut || Tilt::None, &mut display);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(display.grid(), game.status(), Viewport::new(12, 9));

    // Inside border: (1,1) origin. Lane 2 is terminal row 3.
    assert_eq!(fb.get(1, 3).unwrap().ch, '█');
    assert_eq!(fb.get(2, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_prints_status_line() {
    let view = GameView::default();
    let vp = Viewport::new(30, 12);

    let running = screen_text(&view.render(&EMPTY_GRID, GameStatus::Running, vp));
    assert!(running.contains("RUNNING"));
    assert!(running.contains("q quit"));

    let lost = Icon::Sad.frame();
    let text = screen_text(&view.render(lost.grid(), GameStatus::Lost, vp));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("r restart"));

    let won = Icon::Happy.frame();
    let text = screen_text(&view.render(won.grid(), GameStatus::Won, vp));
    assert!(text.contains("YOU WIN"));
}

#[test]
fn term_view_centers_in_large_viewport() {
    let view = GameView::default();
    let fb = view.render(&EMPTY_GRID, GameStatus::Running, Viewport::new(32, 19));

    // (32 - 12) / 2 = 10, (19 - 9) / 2 = 5
    assert_eq!(fb.get(10, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let view = GameView::default();
    let fb = view.render(&EMPTY_GRID, GameStatus::Running, Viewport::new(4, 2));
    assert_eq!((fb.width(), fb.height()), (4, 2));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
