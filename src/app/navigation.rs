use super::*;

impl BuilderApp {
    pub fn abrir_constructor(&mut self) {
        self.state = AppState::Builder;
        self.message.clear();
    }

    pub fn abrir_quiz(&mut self) {
        self.state = AppState::TakeQuiz;
        self.message.clear();
        self.iniciar_descarga_quizzes();
    }

    pub fn volver_al_menu_principal(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    pub fn vaciar_formulario(&mut self) {
        self.doc = FormDocument::new();
        self.confirm_clear = false;
        self.message.clear();
        // Tras vaciar se aterriza en el constructor vacío
        self.state = AppState::Builder;
    }

    pub fn confirm_clear(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar borrado")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres vaciar el formulario? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, vaciar").clicked() {
                        self.vaciar_formulario();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_clear = false;
                    }
                });
            });
    }
}
