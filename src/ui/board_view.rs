//! Board rendering for the N-in-a-row GUI

use crate::{Board, Mark, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any.
    ///
    /// With `interactive` off nothing is hovered or clicked.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Option<Mark>,
        winning_line: Option<&[Pos]>,
        interactive: bool,
    ) -> Option<Pos> {
        self.size = board.size();
        let available_size = ui.available_size();

        // Fit the grid to the available space, capped so small grids stay compact
        let max_grid = available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN;
        self.cell_size = (max_grid / self.size as f32).min(MAX_CELL_SIZE).max(1.0);
        let grid_side = self.cell_size * self.size as f32;
        let board_side = grid_side + 2.0 * BOARD_MARGIN;

        let (response, painter) =
            ui.allocate_painter(Vec2::splat(board_side), Sense::click());

        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(grid_side),
        );

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        painter.rect_filled(self.grid_rect, CornerRadius::ZERO, CELL_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !interactive {
            return None;
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&pos| board.is_empty(pos));

        if let (Some(pos), Some(mark)) = (hovered, current_turn) {
            self.draw_hover_preview(&painter, pos, mark);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.grid_rect.min + Vec2::new(offset, 0.0);
            let end = self.grid_rect.min + Vec2::new(offset, self.grid_rect.height());
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.grid_rect.min + Vec2::new(0.0, offset);
            let end = self.grid_rect.min + Vec2::new(self.grid_rect.width(), offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.rows().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                if mark != Mark::Empty {
                    self.draw_mark(painter, Pos::new(row, col), mark, mark_color(mark));
                }
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let stroke = Stroke::new((self.cell_size * MARK_STROKE_RATIO).max(1.5), color);

        match mark {
            Mark::X => {
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                let d = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, radius, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            painter.line_segment(
                [self.board_to_screen(*first), self.board_to_screen(*last)],
                stroke,
            );
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            painter.circle_stroke(center, self.cell_size * 0.45, stroke);
        }
    }

    /// Draw a faded mark under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        let cell = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size));
        painter.rect_filled(cell.shrink(GRID_LINE_WIDTH), CornerRadius::ZERO, hover_fill());
        self.draw_mark(painter, pos, turn, mark_color(turn).gamma_multiply(0.35));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as isize;
        let row = (relative.y / self.cell_size).floor() as isize;

        if Board::in_bounds_for(self.size, row, col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => MARK_X,
        Mark::O => MARK_O,
        Mark::Empty => GRID_LINE,
    }
}
