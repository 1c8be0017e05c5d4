use eframe::egui;
use quiz_maker::BuilderApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([920.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Quiz Maker",
        options,
        Box::new(|cc| {
            // Recupera el borrador guardado, si lo hay
            let app = cc
                .storage
                .and_then(|storage| eframe::get_value::<BuilderApp>(storage, eframe::APP_KEY))
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}
