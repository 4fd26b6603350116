use eframe::egui;

/// Input row; returns the submitted question, if any.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Tapez votre message...")
                .desired_width(290.0),
        );
        if ui.button("Envoyer").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(
                "Posez des questions sur les heures de bureau, les ressources du département ou les politiques académiques",
            )
            .weak()
            .size(9.0),
        );
    });

    if send && !input_text.trim().is_empty() {
        let message = input_text.clone();
        input_text.clear();
        return Some(message);
    }

    None
}
