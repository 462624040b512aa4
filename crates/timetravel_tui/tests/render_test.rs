//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use timetravel_tictactoe::BoardSize;
use timetravel_tui::{App, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::default());
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("1. Go to game start"));
    assert!(!screen.contains("Go to move #1"));
    assert!(screen.contains("Board Configuration"));
    for label in ["3x3", "4x4", "5x5"] {
        assert!(screen.contains(label));
    }
}

#[test]
fn test_screen_after_win() {
    let mut app = App::new(BoardSize::Three);
    for index in [0, 4, 1, 5, 2] {
        app.place(index);
    }
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5"));
}

#[test]
fn test_screen_after_jump_keeps_future_entries() {
    let mut app = App::new(BoardSize::Four);
    for index in [0, 5, 10] {
        app.place(index);
    }
    app.jump(1);
    let screen = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move #3"));
}

#[test]
fn test_five_by_five_renders_all_cells() {
    let mut app = App::new(BoardSize::Five);
    app.handle_key(KeyCode::Tab);
    let screen = render(&app);
    assert_eq!(screen.matches('·').count(), 25);
}
