//! Main application for the N-in-a-row GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::{AppConfig, GameConfig, GameSession, Mark, MoveOutcome, Phase, MAX_GRID_SIZE};

/// Values typed into the setup form, unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupForm {
    pub grid_size: usize,
    pub win_condition: usize,
}

impl From<&AppConfig> for SetupForm {
    fn from(config: &AppConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            win_condition: config.win_condition,
        }
    }
}

/// Main N-in-a-row application
pub struct NinarowApp {
    session: GameSession,
    board_view: BoardView,
    defaults: AppConfig,
    form: SetupForm,
    /// Blocking message shown on the setup screen after a rejected submit
    setup_error: Option<String>,
}

impl Default for NinarowApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl NinarowApp {
    /// Create a new app whose setup form starts from `defaults`
    pub fn with_config(defaults: AppConfig) -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
            form: SetupForm::from(&defaults),
            defaults,
            setup_error: None,
        }
    }

    pub fn new(_cc: &eframe::CreationContext<'_>, defaults: AppConfig) -> Self {
        Self::with_config(defaults)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn form_mut(&mut self) -> &mut SetupForm {
        &mut self.form
    }

    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    /// Validate the form and start a game, or keep the setup screen with an error
    pub fn submit_setup(&mut self) {
        match GameConfig::new(self.form.grid_size, self.form.win_condition)
            .and_then(|config| self.session.start(config))
        {
            Ok(()) => self.setup_error = None,
            Err(e) => self.setup_error = Some(e.to_string()),
        }
    }

    /// Forward a cell click to the session
    pub fn click_cell(&mut self, pos: crate::Pos) -> MoveOutcome {
        let outcome = self.session.play(pos);
        debug!(?outcome, "cell clicked");
        outcome
    }

    /// Back to the setup screen with the form restored to defaults
    pub fn reset(&mut self) {
        self.session.reset();
        self.form = SetupForm::from(&self.defaults);
        self.setup_error = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(config) = self.session.config() {
                        ui.label(format!(
                            "{0}x{0} - {1} in a row",
                            config.grid_size(),
                            config.win_condition()
                        ));
                    }
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the configuration form
    fn render_setup(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("N IN A ROW").size(28.0).strong().color(TEXT_PRIMARY));
                ui.add_space(20.0);

                Self::card_frame().show(ui, |ui| {
                    egui::Grid::new("setup_form")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Grid size").color(TEXT_SECONDARY));
                            let grid_size = egui::DragValue::new(&mut self.form.grid_size);
                            ui.add(grid_size.range(0..=99));
                            ui.end_row();

                            ui.label(RichText::new("Win condition").color(TEXT_SECONDARY));
                            let win_condition = egui::DragValue::new(&mut self.form.win_condition);
                            ui.add(win_condition.range(0..=99));
                            ui.end_row();
                        });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "Grid size 3 to {MAX_GRID_SIZE}, win condition 3 to grid size"
                        ))
                        .size(11.0)
                        .color(TEXT_MUTED),
                    );
                    ui.add_space(8.0);

                    if ui.button(RichText::new("Start Game").size(14.0).strong()).clicked() {
                        self.submit_setup();
                    }
                });

                if let Some(msg) = &self.setup_error {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(ERROR_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
                        });
                }
            });
        });
    }

    /// Render the side panel with status and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
            });
    }

    /// Render the turn / result message
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.session.phase() {
                Phase::Won(_) => WIN_HIGHLIGHT,
                Phase::InProgress => match self.session.current_mark() {
                    Some(Mark::O) => MARK_O,
                    _ => MARK_X,
                },
                Phase::Draw | Phase::Setup => TEXT_PRIMARY,
            };
            ui.label(
                RichText::new(self.session.status_message())
                    .size(18.0)
                    .strong()
                    .color(color),
            );

            if let Some(board) = self.session.board() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Moves: {}", board.mark_count()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            if ui.button("Reset Game").clicked() {
                self.reset();
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(board) = self.session.board() else {
                return;
            };
            let winning_line = self.session.winning_line();
            let interactive = self.session.phase() == Phase::InProgress;

            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        board,
                        self.session.current_mark(),
                        winning_line,
                        interactive,
                    )
                })
                .inner;

            if let Some(pos) = clicked {
                self.click_cell(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, submit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Enter),
            )
        });

        // N - New game (back to setup)
        if new_game && self.session.phase() != Phase::Setup {
            self.reset();
        }

        // Enter - Submit setup form
        if submit && self.session.phase() == Phase::Setup {
            self.submit_setup();
        }
    }
}

impl eframe::App for NinarowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        if self.session.phase() == Phase::Setup {
            self.render_setup(ctx);
        } else {
            self.render_side_panel(ctx);
            self.render_board(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink for a scoped `tracing` subscriber
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_rejected_setup_after_game_warns_and_changes_nothing() {
        let mut app = NinarowApp::default();
        app.submit_setup();
        app.click_cell(Pos::new(1, 1));
        app.reset();

        app.form_mut().grid_size = 11;
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || app.submit_setup());

        assert_eq!(app.session().phase(), Phase::Setup);
        assert!(app.session().board().is_none());
        assert_eq!(app.click_cell(Pos::new(0, 0)), MoveOutcome::Ignored);
        assert_eq!(
            app.setup_error(),
            Some("invalid grid size 11: grid size must be between 3 and 10")
        );

        let output = logs.contents();
        assert!(output.contains("WARN"), "log output: {output:?}");
        assert!(output.contains("rejected game configuration"), "log output: {output:?}");

        // A corrected form starts a fresh game
        app.form_mut().grid_size = 4;
        app.submit_setup();
        assert_eq!(app.session().phase(), Phase::InProgress);
        assert_eq!(app.session().board().map(|b| b.mark_count()), Some(0));
        assert!(app.setup_error().is_none());
    }

    #[test]
    fn test_invalid_setup_stays_on_setup() {
        let mut app = NinarowApp::default();
        *app.form_mut() = SetupForm {
            grid_size: 11,
            win_condition: 3,
        };
        app.submit_setup();
        assert_eq!(app.session().phase(), Phase::Setup);
        assert_eq!(
            app.setup_error(),
            Some("invalid grid size 11: grid size must be between 3 and 10")
        );

        app.form_mut().grid_size = 4;
        app.form_mut().win_condition = 5;
        app.submit_setup();
        assert_eq!(app.session().phase(), Phase::Setup);
        assert!(app.setup_error().is_some());
    }

    #[test]
    fn test_valid_setup_starts_game() {
        let mut app = NinarowApp::default();
        app.form_mut().grid_size = 5;
        app.form_mut().win_condition = 4;
        app.submit_setup();
        assert_eq!(app.session().phase(), Phase::InProgress);
        assert_eq!(app.session().board().map(|b| b.size()), Some(5));
        assert!(app.setup_error().is_none());
    }

    #[test]
    fn test_reset_restores_form_defaults() {
        let defaults = AppConfig {
            grid_size: 6,
            win_condition: 4,
        };
        let mut app = NinarowApp::with_config(defaults);
        app.form_mut().grid_size = 3;
        app.form_mut().win_condition = 3;
        app.submit_setup();
        app.click_cell(Pos::new(0, 0));

        app.reset();
        assert_eq!(app.session().phase(), Phase::Setup);
        assert_eq!(
            *app.form_mut(),
            SetupForm {
                grid_size: 6,
                win_condition: 4
            }
        );
    }

    #[test]
    fn test_click_after_win_ignored() {
        let mut app = NinarowApp::default();
        app.submit_setup();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            app.click_cell(Pos::new(r, c));
        }
        assert!(matches!(
            app.click_cell(Pos::new(0, 2)),
            MoveOutcome::Won { winner: Mark::X, .. }
        ));
        assert_eq!(app.click_cell(Pos::new(2, 2)), MoveOutcome::Ignored);
        assert_eq!(app.session().status_message(), "Player X wins!");
    }
}
