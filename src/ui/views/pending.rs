use crate::BuilderApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_submitting(app: &mut BuilderApp, ctx: &Context) {
    // El spinner fuerza repintados, así que el poll del canal sigue vivo.
    centered_panel(ctx, 300.0, 400.0, |ui| {
        ui.add_space(60.0);
        ui.label(
            RichText::new(&app.message)
                .heading()
                .color(egui::Color32::YELLOW),
        );
        ui.add_space(20.0);
        ui.add(Spinner::new());
    });
}
