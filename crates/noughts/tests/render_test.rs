//! Tests for board styling: mark colors, finished boards and the winning line.

use noughts::ShellConfig;
use noughts::tui::{App, Command, Hitmap, draw};
use noughts_core::{GameStatus, Player, Position};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};

fn render(app: &App) -> (Hitmap, Buffer) {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    let mut hitmap = Hitmap::default();
    terminal.draw(|frame| hitmap = draw(frame, app)).unwrap();
    (hitmap, terminal.backend().buffer().clone())
}

fn play(app: &mut App, positions: &[Position]) {
    for &pos in positions {
        app.dispatch(Command::Play(pos));
    }
}

/// The terminal cell holding the mark or number of a board cell.
fn mark_cell(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// The top-left border corner of a board cell.
fn border_cell(rect: Rect) -> (u16, u16) {
    (rect.x, rect.y)
}

const X_TOP_ROW: [Position; 5] = [
    Position::TopLeft,
    Position::MiddleLeft,
    Position::TopCenter,
    Position::Center,
    Position::TopRight,
];

#[test]
fn test_marks_use_player_colors() {
    let mut app = App::new(ShellConfig::default()).unwrap();
    play(&mut app, &[Position::TopLeft, Position::Center]);
    let palette = app.palette();

    let (hitmap, buffer) = render(&app);

    let x = &buffer[mark_cell(hitmap.cells[Position::TopLeft.to_index()])];
    assert_eq!(x.symbol(), "X");
    assert_eq!(x.fg, palette.x);

    let o = &buffer[mark_cell(hitmap.cells[Position::Center.to_index()])];
    assert_eq!(o.symbol(), "O");
    assert_eq!(o.fg, palette.o);
    assert_ne!(palette.x, palette.o);
}

#[test]
fn test_configured_colors_reach_the_board() {
    let config = ShellConfig::from_toml("x_color = \"magenta\"\no_color = \"cyan\"").unwrap();
    let mut app = App::new(config).unwrap();
    play(&mut app, &[Position::BottomLeft, Position::BottomRight]);

    let (hitmap, buffer) = render(&app);

    assert_eq!(
        buffer[mark_cell(hitmap.cells[Position::BottomLeft.to_index()])].fg,
        Color::Magenta
    );
    assert_eq!(
        buffer[mark_cell(hitmap.cells[Position::BottomRight.to_index()])].fg,
        Color::Cyan
    );
}

#[test]
fn test_empty_cells_show_their_number() {
    let app = App::new(ShellConfig::default()).unwrap();
    let (hitmap, buffer) = render(&app);

    for pos in Position::ALL {
        let cell = &buffer[mark_cell(hitmap.cells[pos.to_index()])];
        assert_eq!(cell.symbol(), pos.number().to_string(), "cell {pos}");
    }
}

#[test]
fn test_running_board_is_not_dimmed() {
    let mut app = App::new(ShellConfig::default()).unwrap();
    play(&mut app, &[Position::TopLeft]);

    let (hitmap, buffer) = render(&app);

    for pos in Position::ALL {
        let border = &buffer[border_cell(hitmap.cells[pos.to_index()])];
        assert_ne!(border.fg, Color::DarkGray, "cell {pos}");
    }
    // Cursor follows the last click.
    assert_eq!(
        buffer[border_cell(hitmap.cells[Position::TopLeft.to_index()])].fg,
        Color::Yellow
    );
}

#[test]
fn test_winning_line_highlighted() {
    let mut app = App::new(ShellConfig::default()).unwrap();
    play(&mut app, &X_TOP_ROW);
    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    let palette = app.palette();

    let (hitmap, buffer) = render(&app);

    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        let rect = hitmap.cells[pos.to_index()];
        assert_eq!(buffer[mark_cell(rect)].bg, palette.win, "mark of {pos}");
        assert_eq!(buffer[border_cell(rect)].fg, palette.win, "border of {pos}");
    }

    for pos in [Position::MiddleLeft, Position::Center, Position::BottomRight] {
        let rect = hitmap.cells[pos.to_index()];
        assert_ne!(buffer[mark_cell(rect)].bg, palette.win, "mark of {pos}");
        assert_eq!(buffer[border_cell(rect)].fg, Color::DarkGray, "border of {pos}");
    }
}

#[test]
fn test_drawn_board_is_dimmed() {
    let mut app = App::new(ShellConfig::default()).unwrap();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        app.dispatch(Command::Play(Position::from_index(index).unwrap()));
    }
    assert_eq!(app.game().status(), GameStatus::Draw);
    let palette = app.palette();

    let (hitmap, buffer) = render(&app);

    for pos in Position::ALL {
        let rect = hitmap.cells[pos.to_index()];
        assert_eq!(buffer[border_cell(rect)].fg, Color::DarkGray, "border of {pos}");
        assert_ne!(buffer[mark_cell(rect)].bg, palette.win, "mark of {pos}");
    }
}

#[test]
fn test_new_game_clears_dimming() {
    let mut app = App::new(ShellConfig::default()).unwrap();
    play(&mut app, &X_TOP_ROW);
    app.dispatch(Command::NewGame);

    let (hitmap, buffer) = render(&app);

    for pos in Position::ALL {
        let rect = hitmap.cells[pos.to_index()];
        assert_ne!(buffer[border_cell(rect)].fg, Color::DarkGray, "border of {pos}");
        assert_eq!(buffer[mark_cell(rect)].symbol(), pos.number().to_string());
    }
}
