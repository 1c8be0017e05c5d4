use crate::BuilderApp;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText, ScrollArea, TextEdit};

// Operación diferida sobre un bloque: se aplica al terminar de pintar la
// lista para no mutarla mientras se recorre.
enum Accion {
    AgregarOpcion(usize),
    EliminarPregunta(usize),
    EliminarOpcion(usize, usize),
}

pub fn ui_builder(app: &mut BuilderApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let content_width = ui.available_width().min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);
                    ui.heading("📝 Nuevo quiz");
                    ui.add_space(10.0);

                    ui.add(
                        TextEdit::singleline(&mut app.doc.title)
                            .hint_text("Título del quiz")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(4.0);
                    ui.add(
                        TextEdit::multiline(&mut app.doc.description)
                            .hint_text("Descripción (opcional)")
                            .desired_rows(2)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(12.0);

                    let mut accion: Option<Accion> = None;

                    let list_max_height = (ui.available_height() - 120.0).max(160.0);
                    ScrollArea::vertical()
                        .max_height(list_max_height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for (pos, pregunta) in app.doc.questions.iter_mut().enumerate() {
                                // La identidad estable del grupo de widgets es
                                // el índice del bloque, no su posición.
                                let q_index = pregunta.index;
                                ui.push_id(q_index, |ui| {
                                    ui.group(|ui| {
                                        ui.set_width(content_width - 24.0);
                                        ui.horizontal(|ui| {
                                            ui.label(
                                                RichText::new(format!("Pregunta {}", pos + 1))
                                                    .strong(),
                                            );
                                            ui.with_layout(
                                                egui::Layout::right_to_left(egui::Align::Center),
                                                |ui| {
                                                    if ui
                                                        .button("🗑 Eliminar pregunta")
                                                        .clicked()
                                                    {
                                                        accion = Some(Accion::EliminarPregunta(
                                                            q_index,
                                                        ));
                                                    }
                                                },
                                            );
                                        });
                                        ui.add(
                                            TextEdit::singleline(&mut pregunta.text)
                                                .hint_text("Enunciado de la pregunta")
                                                .desired_width(f32::INFINITY),
                                        );
                                        ui.add_space(6.0);

                                        for opcion in pregunta.choices.iter_mut() {
                                            let c_index = opcion.index;
                                            ui.push_id(c_index, |ui| {
                                                ui.horizontal(|ui| {
                                                    ui.checkbox(&mut opcion.is_correct, "Correcta");
                                                    ui.add(
                                                        TextEdit::singleline(&mut opcion.text)
                                                            .hint_text("Texto de la opción")
                                                            .desired_width(
                                                                ui.available_width() - 40.0,
                                                            ),
                                                    );
                                                    if ui.button("🗑").clicked() {
                                                        accion = Some(Accion::EliminarOpcion(
                                                            q_index, c_index,
                                                        ));
                                                    }
                                                });
                                            });
                                        }

                                        if ui.button("➕ Añadir opción").clicked() {
                                            accion = Some(Accion::AgregarOpcion(q_index));
                                        }
                                    });
                                });
                                ui.add_space(8.0);
                            }
                        });

                    if let Some(accion) = accion {
                        match accion {
                            Accion::AgregarOpcion(q) => app.agregar_opcion(q),
                            Accion::EliminarPregunta(q) => app.eliminar_pregunta(q),
                            Accion::EliminarOpcion(q, c) => app.eliminar_opcion(q, c),
                        }
                    }

                    ui.add_space(10.0);
                    let (agregar, publicar) =
                        two_button_row(ui, content_width, "➕ Añadir pregunta", "📤 Publicar quiz");
                    if agregar {
                        app.agregar_pregunta();
                    }
                    if publicar {
                        app.publicar_formulario();
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
        });
    });
}
