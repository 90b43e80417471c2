//! Win detection around the last move
//!
//! A move wins when the run of its mark through the played cell reaches
//! `win_condition` in any of the four line orientations. Only the cells
//! reachable from the played cell are inspected, so the cost per move is
//! bounded by the run lengths, not the board size.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `mark` cells stepping from `pos` along `(dr, dc)`.
///
/// The starting cell itself is not counted.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dr: isize, dc: isize, mark: Mark) -> usize {
    let mut count = 0;
    while let Some(next) = pos.offset(dr, dc, count as isize + 1, board.size()) {
        if board.get(next) != mark {
            break;
        }
        count += 1;
    }
    count
}

/// Check whether placing `mark` at `pos` completes a line of `win_condition`.
///
/// The played cell counts as one regardless of what the board holds there,
/// so this can be called before or after the mark is written.
pub fn has_win_at(board: &Board, pos: Pos, mark: Mark, win_condition: usize) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = 1
            + count_direction(board, pos, dr, dc, mark)
            + count_direction(board, pos, -dr, -dc, mark);
        run >= win_condition
    })
}

/// Find the full winning run through `pos`, if any.
///
/// Returns the cells of the first qualifying direction ordered from the
/// backward end to the forward end. The run may be longer than
/// `win_condition`.
pub fn find_winning_line(
    board: &Board,
    pos: Pos,
    mark: Mark,
    win_condition: usize,
) -> Option<Vec<Pos>> {
    if mark == Mark::Empty {
        return None;
    }
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, mark);
        let forward = count_direction(board, pos, dr, dc, mark);
        if 1 + back + forward < win_condition {
            continue;
        }

        let line = (-(back as isize)..=forward as isize)
            .filter_map(|dist| pos.offset(dr, dc, dist, size))
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[((usize, usize), Mark)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &((r, c), m) in marks {
            board.place(Pos::new(r, c), m);
        }
        board
    }

    #[test]
    fn test_horizontal_progression_5x5_win4() {
        let mut board = Board::new(5).unwrap();
        for col in 0..4 {
            let pos = Pos::new(0, col);
            board.place(pos, Mark::X);
            let won = has_win_at(&board, pos, Mark::X, 4);
            assert_eq!(won, col == 3, "placement at column {col}");
        }
    }

    #[test]
    fn test_vertical() {
        let board = board_with(4, &[((0, 2), Mark::O), ((1, 2), Mark::O), ((2, 2), Mark::O)]);
        assert!(has_win_at(&board, Pos::new(1, 2), Mark::O, 3));
        assert!(!has_win_at(&board, Pos::new(1, 2), Mark::O, 4));
    }

    #[test]
    fn test_diagonal_se() {
        let mut board = Board::new(6).unwrap();
        for i in 0..4 {
            board.place(Pos::new(1 + i, 1 + i), Mark::X);
        }
        assert!(has_win_at(&board, Pos::new(4, 4), Mark::X, 4));
        assert!(has_win_at(&board, Pos::new(2, 2), Mark::X, 4));
        assert!(!has_win_at(&board, Pos::new(2, 2), Mark::X, 5));
    }

    #[test]
    fn test_diagonal_sw() {
        let mut board = Board::new(6).unwrap();
        for i in 0..4 {
            board.place(Pos::new(i, 5 - i), Mark::O);
        }
        assert!(has_win_at(&board, Pos::new(3, 2), Mark::O, 4));
        assert!(has_win_at(&board, Pos::new(0, 5), Mark::O, 4));
    }

    #[test]
    fn test_threshold_boundaries() {
        for k in 3..=6 {
            let mut board = Board::new(10).unwrap();
            // Run of k - 1
            for col in 0..k - 1 {
                board.place(Pos::new(5, col), Mark::X);
            }
            assert!(!has_win_at(&board, Pos::new(5, k - 2), Mark::X, k));

            // Run of exactly k
            board.place(Pos::new(5, k - 1), Mark::X);
            assert!(has_win_at(&board, Pos::new(5, k - 1), Mark::X, k));

            // Run longer than k
            board.place(Pos::new(5, k), Mark::X);
            assert!(has_win_at(&board, Pos::new(5, k), Mark::X, k));
        }
    }

    #[test]
    fn test_middle_placement_joins_runs() {
        let board = board_with(
            7,
            &[
                ((3, 0), Mark::X),
                ((3, 1), Mark::X),
                ((3, 3), Mark::X),
                ((3, 4), Mark::X),
            ],
        );
        // (3, 2) is still empty; the played cell counts itself
        assert!(has_win_at(&board, Pos::new(3, 2), Mark::X, 5));
        assert!(!has_win_at(&board, Pos::new(3, 2), Mark::X, 6));
    }

    #[test]
    fn test_opponent_marks_do_not_merge() {
        let board = board_with(
            5,
            &[
                ((2, 0), Mark::O),
                ((2, 1), Mark::O),
                ((2, 2), Mark::X),
                ((2, 3), Mark::O),
                ((2, 4), Mark::O),
            ],
        );
        assert!(!has_win_at(&board, Pos::new(2, 2), Mark::X, 3));
        // The X in the middle splits the O marks into two runs of two
        assert!(!has_win_at(&board, Pos::new(2, 1), Mark::O, 3));
        assert!(!has_win_at(&board, Pos::new(2, 3), Mark::O, 3));
    }

    #[test]
    fn test_full_length_line_required() {
        let mut board = Board::new(4).unwrap();
        for i in 0..3 {
            board.place(Pos::new(i, i), Mark::X);
        }
        assert!(!has_win_at(&board, Pos::new(2, 2), Mark::X, 4));
        board.place(Pos::new(3, 3), Mark::X);
        assert!(has_win_at(&board, Pos::new(3, 3), Mark::X, 4));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = Board::new(3).unwrap();
        assert!(!has_win_at(&board, Pos::new(1, 1), Mark::Empty, 3));
        assert!(find_winning_line(&board, Pos::new(1, 1), Mark::Empty, 3).is_none());
    }

    #[test]
    fn test_count_direction_stops_at_edge() {
        let board = board_with(3, &[((0, 1), Mark::X), ((0, 2), Mark::X)]);
        assert_eq!(count_direction(&board, Pos::new(0, 0), 0, 1, Mark::X), 2);
        assert_eq!(count_direction(&board, Pos::new(0, 0), 0, -1, Mark::X), 0);
        assert_eq!(count_direction(&board, Pos::new(0, 0), -1, 1, Mark::X), 0);
    }

    #[test]
    fn test_find_winning_line_ordered() {
        let board = board_with(
            5,
            &[
                ((0, 4), Mark::O),
                ((1, 3), Mark::O),
                ((2, 2), Mark::O),
                ((3, 1), Mark::O),
            ],
        );
        let line = find_winning_line(&board, Pos::new(2, 2), Mark::O, 4).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(0, 4),
                Pos::new(1, 3),
                Pos::new(2, 2),
                Pos::new(3, 1)
            ]
        );
    }

    #[test]
    fn test_find_winning_line_includes_overline() {
        let mut board = Board::new(6).unwrap();
        for row in 0..6 {
            board.place(Pos::new(row, 0), Mark::X);
        }
        let line = find_winning_line(&board, Pos::new(3, 0), Mark::X, 4).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&Pos::new(0, 0)));
        assert_eq!(line.last(), Some(&Pos::new(5, 0)));
    }

    #[test]
    fn test_no_line_without_win() {
        let board = board_with(3, &[((0, 0), Mark::X), ((1, 1), Mark::O)]);
        assert!(find_winning_line(&board, Pos::new(0, 0), Mark::X, 3).is_none());
    }
}
