use common::games::tictactoe::{Board, Mark, TicTacToeGameState, BOARD_SIDE};

pub struct BoardView {
    hovered_cell: Option<usize>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 150.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self { hovered_cell: None }
    }

    pub fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width.min(available_height) / BOARD_SIDE as f32;
        side.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let (row, col) = Board::to_row_col(index);
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - board_rect.left()) / cell_size) as usize;
        let row = ((pos.y - board_rect.top()) / cell_size) as usize;
        Board::to_index(row, col)
    }

    /// Paints the grid and returns the cell clicked this frame. Clicks are only reported
    /// when `accepts_input` is set.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        cell_size: f32,
        accepts_input: bool,
    ) -> Option<usize> {
        let board_side = cell_size * BOARD_SIDE as f32;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(last_move) = state.last_move() {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, last_move),
                0.0,
                egui::Color32::from_rgb(255, 245, 200),
            );
        }

        self.hovered_cell = None;
        if accepts_input
            && let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::cell_at(rect, cell_size, hover_pos)
            && state.board().is_empty_cell(index)
        {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.hovered_cell = Some(index);
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        for (index, &mark) in state.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => draw_x(painter, cell_rect),
                Mark::O => draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = state.winning_line() {
            let start = Self::cell_rect(rect, cell_size, line.start()).center();
            let end = Self::cell_rect(rect, cell_size, line.end()).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(40, 160, 60)),
            );
        }

        if response.clicked() {
            self.hovered_cell
        } else {
            None
        }
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(BoardView::MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let radius = rect.width() / 2.0 - rect.width() * 0.2;
    let stroke = egui::Stroke::new(BoardView::MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));
    painter.circle_stroke(rect.center(), radius, stroke);
}
