use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent, Sender};
use crate::format::MessageFormatter;

use super::components::{header, input_bar, message_list};
use super::state::WidgetState;

pub struct ChatApp {
    state: WidgetState,
    formatter: MessageFormatter,
    command_sender: mpsc::Sender<NetworkCommand>,
    event_receiver: mpsc::Receiver<NetworkEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<NetworkCommand>,
        event_receiver: mpsc::Receiver<NetworkEvent>,
        session_id: String,
    ) -> Self {
        let state = WidgetState::new(session_id);
        log::info!("Chat widget ready (session {})", state.session_id());

        Self {
            state,
            formatter: MessageFormatter::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.handle_event(event);
        }
    }

    fn submit(&mut self, question: String) {
        self.state.push_message(Sender::User, question.clone());
        self.state.begin_request();
        if let Err(err) = self.command_sender.try_send(NetworkCommand::Ask { question }) {
            log::warn!("Failed to send command to network: {err}");
            self.state.handle_event(NetworkEvent::RequestFailed);
        }
    }

    /// Round launcher button shown while the panel is closed.
    fn toggle_button(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("chat_toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("💬").size(24.0))
                    .min_size(egui::vec2(56.0, 56.0))
                    .corner_radius(egui::CornerRadius::same(28));
                if ui.add(button).clicked() {
                    self.state.open = true;
                }
            });
    }

    fn panel(&mut self, ctx: &egui::Context) {
        egui::Window::new("faculty_chat_panel")
            .title_bar(false)
            .resizable(false)
            .fixed_size(egui::vec2(380.0, 560.0))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                if header::render(ui) {
                    self.state.open = false;
                }
                ui.separator();

                message_list::render(
                    ui,
                    &self.formatter,
                    &self.state.messages,
                    self.state.is_typing(),
                );

                ui.separator();
                if let Some(question) = input_bar::render(ui, &mut self.state.input_text) {
                    self.submit(question);
                }
            });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        if self.state.open {
            self.panel(ctx);
        } else {
            self.toggle_button(ctx);
        }

        ctx.request_repaint();
    }
}
