use eframe::egui;
use kanadrill::gui::KanadrillApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 560.0])
            .with_title("Kanadrill"),
        ..Default::default()
    };

    eframe::run_native("kanadrill", options, Box::new(|cc| Ok(Box::new(KanadrillApp::new(cc)))))
}
