//! Shows an [`EmojiSlider`] and logs the progress it reports.
//!
//! Run with `RUST_LOG=debug` to see every report.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_emoji_slider::{Emoji, EmojiSlider, NotifyPolicy, SliderState};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    let mut app = EmojiSliderApp::default();
    eframe::run_simple_native("Emoji slider", options, move |ctx, _frame| {
        egui::CentralPanel::default().show(ctx, |ui| app.ui(ui));
    })
}

struct EmojiSliderApp {
    emoji: Emoji,
    notify: NotifyPolicy,
    last_progress: Option<f32>,
    slider_id: Option<egui::Id>,
}

impl Default for EmojiSliderApp {
    fn default() -> Self {
        Self {
            emoji: Emoji::LoveFace,
            notify: NotifyPolicy::Always,
            last_progress: None,
            slider_id: None,
        }
    }
}

impl EmojiSliderApp {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Emoji slider");

        ui.horizontal(|ui| {
            ui.label("Emoji:");
            egui::ComboBox::from_id_salt("emoji")
                .selected_text(format!("{} {}", self.emoji, self.emoji.name()))
                .show_ui(ui, |ui| {
                    for emoji in Emoji::ALL {
                        ui.selectable_value(
                            &mut self.emoji,
                            emoji,
                            format!("{emoji} {}", emoji.name()),
                        );
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Report:");
            ui.radio_value(&mut self.notify, NotifyPolicy::Always, "every frame");
            ui.radio_value(&mut self.notify, NotifyPolicy::OnChange, "on change");
        });

        if ui.button("Reset").clicked() {
            if let Some(id) = self.slider_id.take() {
                SliderState::remove(ui.ctx(), id);
            }
            self.last_progress = None;
        }

        // Leave room above the card for the floating emoji.
        ui.add_space(220.0);

        let last_progress = &mut self.last_progress;
        let output = ui
            .vertical_centered(|ui| {
                EmojiSlider::new()
                    .id_salt("emoji_slider")
                    .emoji(self.emoji)
                    .notify(self.notify)
                    .on_slide(|progress| {
                        log::debug!("OnProgressChange: {progress}");
                        *last_progress = Some(progress);
                    })
                    .show(ui)
            })
            .inner;
        self.slider_id = Some(output.id);

        ui.add_space(12.0);
        match self.last_progress {
            Some(progress) => ui.label(format!("Progress: {progress:.1}%")),
            None => ui.weak("No progress reported yet"),
        };
    }
}
