use common::games::tictactoe::{ComputerMoveScheduler, GameMode, Outcome, TicTacToeGameState};
use common::log;
use eframe::egui;
use std::time::Duration;

use super::board_view::BoardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    CellClicked(usize),
    SelectMode(GameMode),
    Reset,
}

pub struct TicTacToeApp {
    game_state: TicTacToeGameState,
    scheduler: ComputerMoveScheduler,
    board_view: BoardView,
}

impl TicTacToeApp {
    const REPAINT_INTERVAL: Duration = Duration::from_millis(50);
    const CONTROLS_HEIGHT: f32 = 140.0;

    pub fn new(mode: GameMode, scheduler: ComputerMoveScheduler) -> Self {
        log!("New game: {}", mode);
        Self {
            game_state: TicTacToeGameState::new(mode),
            scheduler,
            board_view: BoardView::new(),
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::CellClicked(index) => {
                if let Err(e) = self.game_state.handle_human_move(index) {
                    log!("Ignored click on cell {}: {}", index, e);
                }
            }
            UiAction::SelectMode(mode) => self.game_state.set_mode(mode),
            UiAction::Reset => self.game_state.reset(),
        }
        self.scheduler.sync(&self.game_state);
    }

    /// Applies a finished computer move, if any, and keeps the pending job in step with the state.
    fn tick(&mut self) {
        if let Some(index) = self.scheduler.poll(&mut self.game_state) {
            log!("Computer played {}", index);
        }
        self.scheduler.sync(&self.game_state);
    }

    fn accepts_clicks(&self) -> bool {
        !self.game_state.outcome().is_over() && !self.game_state.is_computer_turn()
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = egui::RichText::new(self.game_state.status_text()).size(24.0).strong();
        let text = match self.game_state.outcome() {
            Outcome::Winner(_) => text.color(egui::Color32::from_rgb(40, 160, 60)),
            Outcome::Draw => text.color(egui::Color32::GRAY),
            Outcome::InProgress => text,
        };
        ui.label(text);

        if self.scheduler.is_pending() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Computer is thinking...");
            });
        } else {
            ui.add_space(18.0);
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let mode = self.game_state.mode();

        ui.horizontal(|ui| {
            for option in [GameMode::HumanVsHuman, GameMode::HumanVsComputer] {
                if ui.selectable_label(mode == option, option.to_string()).clicked() {
                    actions.push(UiAction::SelectMode(option));
                }
            }
        });

        ui.add_space(8.0);

        if ui.button("Reset Game").clicked() {
            actions.push(UiAction::Reset);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_status(ui);
                ui.add_space(12.0);

                let cell_size = BoardView::calculate_cell_size(
                    ui.available_width(),
                    ui.available_height() - Self::CONTROLS_HEIGHT,
                );
                let accepts_input = self.accepts_clicks();
                if let Some(index) = self.board_view.show(ui, &self.game_state, cell_size, accepts_input) {
                    actions.push(UiAction::CellClicked(index));
                }

                ui.add_space(16.0);
                self.render_controls(ui, &mut actions);
            });
        });

        for action in actions {
            self.handle_action(action);
        }

        if self.scheduler.is_pending() {
            ctx.request_repaint_after(Self::REPAINT_INTERVAL);
        }
    }
}
