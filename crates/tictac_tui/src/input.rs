//! Keyboard and mouse input mapping.

use crate::ui::{ScreenLayout, Target};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tictac_core::Position;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a position.
    Tap(Position),
    /// Place a mark under the cursor.
    TapCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Pointer is over a target (or nothing).
    Hover(Option<Target>),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Tap),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::TapCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a mouse event to an action using the last drawn layout.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    let target = layout.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match target? {
            Target::Cell(pos) => Some(Action::Tap(pos)),
            Target::Restart => Some(Action::Restart),
        },
        MouseEventKind::Moved => Some(Action::Hover(target)),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    next.and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_tap_row_major() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('1'))),
            Some(Action::Tap(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('5'))),
            Some(Action::Tap(Position::Center))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('9'))),
            Some(Action::Tap(Position::BottomRight))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(action_for_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        use Direction::*;
        assert_eq!(move_cursor(Position::Center, Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Right), Position::MiddleRight);
    }

    #[test]
    fn test_mouse_click_maps_through_layout() {
        let layout = crate::ui::layout(Rect::new(0, 0, 60, 30));
        let cell = layout.cell(Position::BottomCenter);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + 1,
            row: cell.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            action_for_mouse(click, &layout),
            Some(Action::Tap(Position::BottomCenter))
        );

        let restart = MouseEvent {
            column: layout.restart.x + 2,
            row: layout.restart.y + 1,
            ..click
        };
        assert_eq!(action_for_mouse(restart, &layout), Some(Action::Restart));

        let nowhere = MouseEvent {
            column: 0,
            row: 0,
            ..click
        };
        assert_eq!(action_for_mouse(nowhere, &layout), None);
    }

    #[test]
    fn test_mouse_move_hovers() {
        let layout = crate::ui::layout(Rect::new(0, 0, 60, 30));
        let cell = layout.cell(Position::Center);
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: cell.x,
            row: cell.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            action_for_mouse(moved, &layout),
            Some(Action::Hover(Some(Target::Cell(Position::Center))))
        );
    }
}
