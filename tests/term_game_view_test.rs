use tui_blocks::core::{get_shape, GameState};
use tui_blocks::term::{
    cell_color, AnchorY, FrameBuffer, GameView, HudState, Viewport, MAX_CELL_SIDE,
};
use tui_blocks::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 10x20 board is 20x20 plus the border.
    let fb = view.render(&snap, &HudState::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide_in_its_colour() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.board[19 * 10] = 5;
    snap.active = None;

    let fb = GameView::default().render(&snap, &HudState::default(), Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    let right = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(Some(left.style.fg), cell_color(5));
}

#[test]
fn term_view_overlays_the_active_piece() {
    let game = GameState::with_seed(3);
    let snap = game.snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &HudState::default(), Viewport::new(22, 22));

    let active = game.active();
    for (x, y) in active.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(Some(cell.style.fg), cell_color(active.value()));
    }
}

#[test]
fn term_view_follows_the_board_size() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.width = 6;
    snap.height = 8;
    snap.board = vec![0; 48];
    snap.active = None;

    let fb = GameView::default().render(&snap, &HudState::default(), Viewport::new(14, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.game_overs = 2;

    let fb = GameView::default().render(&snap, &HudState::default(), Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("RESETS"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, &HudState::default(), Viewport::new(26, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_draws_the_preview_shape() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.next = PieceKind::O;
    let mut hud = HudState::default();
    hud.preview = Some(get_shape(PieceKind::O));

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &hud, Viewport::new(60, 22));

    // Board frame is 22 wide, centred in 60 columns: x = 19..41, panel at 43.
    // SCORE/LINES/RESETS take 9 rows, NEXT label on row 9, grid from row 10.
    let panel_x = 19 + 22 + 2;
    for (dx, dy) in [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (3, 1)] {
        let cell = fb.get(panel_x + dx, 10 + dy).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", dx, dy);
        assert_eq!(Some(cell.style.fg), cell_color(2));
    }
}

#[test]
fn term_view_shows_game_over_banner_until_it_expires() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();
    let mut hud = HudState::default();
    hud.show_game_over(370);

    let fb = view.render(&snap, &hud, Viewport::new(22, 22));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("370"));

    hud.advance(5_000);
    let fb = view.render(&snap, &hud, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn render_into_reuses_the_framebuffer() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, &HudState::default(), Viewport::new(30, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 24));
    let first = fb.clone();
    view.render_into(&snap, &HudState::default(), Viewport::new(30, 24), &mut fb);
    assert_eq!(fb, first);
}

#[test]
fn custom_cell_size_scales_the_board() {
    let snap = GameState::with_seed(1).snapshot();
    let fb = GameView::new(1, 1).render(&snap, &HudState::default(), Viewport::new(12, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 21).unwrap().ch, '┘');
}

#[test]
fn oversized_cells_are_clamped() {
    let snap = GameState::with_seed(1).snapshot();
    let huge = GameView::new(u16::MAX, u16::MAX)
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &HudState::default(), Viewport::new(200, 200));
    let clamped = GameView::new(MAX_CELL_SIDE, MAX_CELL_SIDE)
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &HudState::default(), Viewport::new(200, 200));
    assert_eq!(huge, clamped);

    // 10 * 8 + 2 columns, centred in 200.
    assert_eq!(huge.get(59, 0).unwrap().ch, '┌');
    assert_eq!(huge.get(59 + 81, 0).unwrap().ch, '┐');
}
