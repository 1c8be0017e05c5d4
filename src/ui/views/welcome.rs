use crate::BuilderApp;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_welcome(app: &mut BuilderApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 260.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("🛠 Quiz Maker");
                        ui.add_space(6.0);
                        ui.label("¿Qué deseas hacer?");
                        ui.add_space(18.0);

                        let hay_borrador = !app.doc.is_empty();

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        // Botones
                        let btn_cont = if hay_borrador {
                            Some(ui.add_sized(
                                [btn_w, btn_h],
                                Button::new("▶ Continuar con el borrador"),
                            ))
                        } else {
                            None
                        };
                        ui.add_space(5.0);
                        let crear_label = if hay_borrador {
                            "🔄 Empezar de 0"
                        } else {
                            "📝 Crear un quiz"
                        };
                        let btn_crear = ui.add_sized([btn_w, btn_h], Button::new(crear_label));
                        ui.add_space(5.0);
                        let btn_responder =
                            ui.add_sized([btn_w, btn_h], Button::new("🎓 Responder un quiz"));
                        ui.add_space(5.0);
                        let btn_salir = ui.add_sized([btn_w, btn_h], Button::new("❌ Salir"));

                        if let Some(b) = btn_cont {
                            if b.clicked() {
                                app.abrir_constructor();
                            }
                        }
                        if btn_crear.clicked() {
                            if hay_borrador {
                                app.confirm_clear = true;
                            } else {
                                app.abrir_constructor();
                            }
                        }
                        if btn_responder.clicked() {
                            app.abrir_quiz();
                        }
                        if btn_salir.clicked() {
                            std::process::exit(0);
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new(&app.message)
                                    .color(egui::Color32::YELLOW)
                                    .strong(),
                            );
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
