use chrono::{Local, TimeZone};
use eframe::egui;

use crate::common::{ChatMessage, Sender};
use crate::format::{FormattedLine, MessageFormatter, Segment};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x8A, 0x85, 0xFF);
const TYPING_DOT: egui::Color32 = egui::Color32::from_rgb(0x2D, 0xD4, 0xBF);

pub fn render(
    ui: &mut egui::Ui,
    formatter: &MessageFormatter,
    messages: &[ChatMessage],
    is_typing: bool,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(430.0)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, formatter, message);
                ui.add_space(6.0);
            }
            if is_typing {
                typing_indicator(ui);
            }
        });
}

fn render_message(ui: &mut egui::Ui, formatter: &MessageFormatter, message: &ChatMessage) {
    let align = match message.sender {
        Sender::User => egui::Align::Max,
        Sender::Bot => egui::Align::Min,
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let fill = match message.sender {
            Sender::User => ACCENT,
            Sender::Bot => ui.visuals().extreme_bg_color,
        };

        // Salt widget ids with the message id so identical bubbles stay distinct.
        ui.push_id(&message.id, |ui| {
            render_bubble(ui, formatter, message, fill);
        });
    });
}

fn render_bubble(
    ui: &mut egui::Ui,
    formatter: &MessageFormatter,
    message: &ChatMessage,
    fill: egui::Color32,
) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_max_width(290.0);
            for line in formatter.format(&message.content) {
                render_line(ui, message.sender, &line);
            }
            ui.label(
                egui::RichText::new(format_time(message.timestamp))
                    .weak()
                    .size(9.0),
            );
        });
}

fn render_line(ui: &mut egui::Ui, sender: Sender, line: &FormattedLine) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        if let Some(marker) = &line.marker {
            ui.label(egui::RichText::new(format!("{marker} ")).weak());
        }

        for segment in &line.segments {
            match segment {
                Segment::Text(text) => {
                    ui.label(text.as_str());
                }
                Segment::Bold(text) => {
                    let rich = egui::RichText::new(text.as_str()).strong();
                    // Purple accent reads badly on the purple user bubble.
                    let rich = match sender {
                        Sender::User => rich,
                        Sender::Bot => rich.color(ACCENT),
                    };
                    ui.label(rich);
                }
                Segment::Honorific(name) => {
                    ui.label(egui::RichText::new(name.as_str()).strong());
                }
                Segment::Email(address) => {
                    ui.hyperlink_to(address.as_str(), format!("mailto:{address}"));
                }
            }
        }
    });
}

fn format_time(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Three pulsing dots shown while a request is outstanding.
fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);

    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for dot in 0..3 {
                    let phase = ((time * 2.5 - f64::from(dot) * 0.4).sin() * 0.5 + 0.5) as f32;
                    let alpha = (100.0 + phase * 155.0) as u8;
                    let color = egui::Color32::from_rgba_unmultiplied(
                        TYPING_DOT.r(),
                        TYPING_DOT.g(),
                        TYPING_DOT.b(),
                        alpha,
                    );
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(9.0, 9.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 3.5, color);
                }
            });
        });
}
