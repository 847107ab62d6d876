//! Tests for the outcome evaluator over generated boards.

use tictac_core::{Board, Cell, Mark, Outcome, Position, WIN_LINES, evaluate, winning_line};

/// Every board with each cell Empty, X or O.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            n /= 3;
        }
        Board::from_cells(cells)
    })
}

fn complete_lines(board: &Board) -> Vec<Mark> {
    WIN_LINES.iter().filter_map(|l| l.owner(board)).collect()
}

#[test]
fn test_single_complete_line_names_its_owner() {
    for board in all_boards() {
        let lines = complete_lines(&board);
        if lines.len() == 1 {
            assert_eq!(evaluate(&board), Outcome::Winner(lines[0]), "{}", board);
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for board in all_boards() {
        let full = board.cells().iter().all(|c| *c != Cell::Empty);
        if full && complete_lines(&board).is_empty() {
            assert_eq!(evaluate(&board), Outcome::Draw, "{}", board);
        }
    }
}

#[test]
fn test_open_board_without_line_in_progress() {
    for board in all_boards() {
        let open = board.cells().contains(&Cell::Empty);
        if open && complete_lines(&board).is_empty() {
            assert_eq!(evaluate(&board), Outcome::InProgress, "{}", board);
        }
    }
}

#[test]
fn test_multiple_lines_resolve_to_first_in_order() {
    for board in all_boards() {
        let lines = complete_lines(&board);
        if let Some(first) = lines.first() {
            assert_eq!(evaluate(&board), Outcome::Winner(*first), "{}", board);
        }
    }
}

#[test]
fn test_winning_line_positions_hold_the_winner() {
    let board: Board = "OX./OX./O.X".parse().unwrap();
    let (mark, line) = winning_line(&board).unwrap();
    assert_eq!(mark, Mark::O);
    for pos in line.positions() {
        assert_eq!(board.get(pos), Cell::Occupied(Mark::O));
    }
    assert!(line.contains(Position::BottomLeft));
}
