use crate::BuilderApp;
use egui::{CentralPanel, Context, RichText, ScrollArea, Spinner};

pub fn ui_take_quiz(app: &mut BuilderApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let content_width = ui.available_width().min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);
                    ui.heading("🎓 Responder quiz");
                    ui.add_space(10.0);

                    if app.take.cargando {
                        ui.add_space(30.0);
                        ui.label("⏳ Descargando quizzes...");
                        ui.add_space(10.0);
                        ui.add(Spinner::new());
                    } else if let Some(quiz) = app.take.quiz.clone() {
                        if !quiz.title.trim().is_empty() {
                            ui.label(RichText::new(&quiz.title).heading());
                            ui.add_space(8.0);
                        }

                        let list_max_height = (ui.available_height() - 70.0).max(160.0);
                        ScrollArea::vertical()
                            .max_height(list_max_height)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                for (pos, pregunta) in quiz.questions.iter().enumerate() {
                                    ui.group(|ui| {
                                        ui.set_width(content_width - 24.0);
                                        ui.label(
                                            RichText::new(format!(
                                                "{}: {}",
                                                pos + 1,
                                                pregunta.text
                                            ))
                                            .strong(),
                                        );
                                        for opcion in &pregunta.options {
                                            let marcada = app.take.seleccion.get(&pregunta.id)
                                                == Some(&opcion.id);
                                            if ui.radio(marcada, &opcion.text).clicked() {
                                                app.seleccionar_opcion(pregunta.id, opcion.id);
                                            }
                                        }
                                    });
                                    ui.add_space(8.0);
                                }
                            });
                    }
                    // Sin quiz descargado el área se queda vacía, sin aviso.

                    ui.add_space(12.0);
                    if ui.button("🔙 Volver al menú principal").clicked() {
                        app.volver_al_menu_principal();
                    }
                });
        });
    });
}
