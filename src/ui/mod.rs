pub mod layout;
pub mod views;

use crate::app::BuilderApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for BuilderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultados de los hilos en segundo plano (envío y descarga)
        self.poll_submit_result();
        self.poll_fetch_result();

        // BARRA SUPERIOR (solo en el constructor)
        if matches!(self.state, AppState::Builder) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Builder => views::builder::ui_builder(self, ctx),
            AppState::Submitting => views::pending::ui_submitting(self, ctx),
            AppState::TakeQuiz => views::take::ui_take_quiz(self, ctx),
        }

        if self.confirm_clear {
            self.confirm_clear(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
