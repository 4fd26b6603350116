use eframe::egui;

/// Panel header with the assistant identity and a close button.
/// Returns true when the close button was clicked.
pub fn render(ui: &mut egui::Ui) -> bool {
    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🤖").size(22.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Assistant de la Faculté").strong());
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::GREEN, "●");
                ui.label(egui::RichText::new("Propulsé par l'IA").weak().size(10.0));
            });
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                close_clicked = true;
            }
        });
    });

    close_clicked
}
