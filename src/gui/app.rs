use std::time::Instant;

use eframe::egui;

use super::{
    fonts,
    settings_panel::SettingsPanel,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::core::{
    kana::Glyph,
    settings::{
        DrillMode,
        KanaVariant,
    },
    DrillSession,
    RevealPhase,
    SyllableKey,
};

const ROMAJI_SIZE: f32 = 96.0;
const KANA_SIZE: f32 = 110.0;

pub struct KanadrillApp {
    session: DrillSession,
    settings_panel: SettingsPanel,
    theme: Theme,
}

impl KanadrillApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self {
            session: DrillSession::new(),
            settings_panel: SettingsPanel::new(),
            theme: Theme::dracula(),
        };

        fonts::install_japanese_font(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, app.theme.clone());
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        app
    }

    fn drill_surface(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.28);

            let pending = self.session.phase() == RevealPhase::PromptShown;

            match self.session.settings().mode {
                DrillMode::PromptToAnswer => {
                    self.romaji_line(ui, self.session.prompt_key(), false);
                    ui.add_space(20.0);
                    self.kana_line(ui, self.session.answer_glyph(), pending);
                }
                DrillMode::AnswerToPrompt => {
                    self.kana_line(ui, self.session.answer_glyph(), false);
                    ui.add_space(20.0);
                    self.romaji_line(ui, self.session.prompt_key(), pending);
                }
            }
        });
    }

    fn romaji_line(&self, ui: &mut egui::Ui, key: Option<SyllableKey>, pending: bool) {
        if let Some(key) = key {
            ui.label(egui::RichText::new(key).size(ROMAJI_SIZE));
        } else if pending {
            self.placeholder_line(ui, ROMAJI_SIZE);
        }
    }

    fn kana_line(&self, ui: &mut egui::Ui, glyph: Option<&'static Glyph>, pending: bool) {
        let Some(glyph) = glyph else {
            if pending {
                self.placeholder_line(ui, KANA_SIZE);
            }
            return;
        };

        let variant = self.session.settings().kana_variant;
        let font_id = egui::FontId::proportional(KANA_SIZE);
        let mut job = egui::text::LayoutJob::default();

        if variant != KanaVariant::Katakana {
            job.append(
                glyph.hiragana,
                0.0,
                egui::TextFormat {
                    font_id: font_id.clone(),
                    color: self.theme.hiragana(),
                    ..Default::default()
                },
            );
        }

        if variant != KanaVariant::Hiragana {
            let leading_space = if variant == KanaVariant::Both { 40.0 } else { 0.0 };
            job.append(
                glyph.katakana,
                leading_space,
                egui::TextFormat { font_id, color: self.theme.katakana(), ..Default::default() },
            );
        }

        ui.label(job);
    }

    // The second side renders "…" while a reveal is in flight, so the
    // surface never looks blank mid-cycle.
    fn placeholder_line(&self, ui: &mut egui::Ui, size: f32) {
        ui.label(egui::RichText::new("…").size(size).color(self.theme.muted()));
    }
}

impl eframe::App for KanadrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.tick(now);

        // Enter, Space and a click on the drill surface all trigger the
        // same draw, but never while the settings panel is open.
        let key_triggered = !self.settings_panel.is_open()
            && ctx.input(|i| {
                i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space)
            });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⚙").clicked() {
                    self.settings_panel.toggle();
                }
                ui.label(
                    egui::RichText::new("Press Enter/Space/Click Anywhere")
                        .color(self.theme.muted()),
                );
            });
        });

        if let Some(patch) = self.settings_panel.show(ctx, self.session.settings()) {
            self.session.apply(patch);
        }

        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                self.drill_surface(ui);
            })
            .response;

        let surface_clicked = !self.settings_panel.is_open()
            && response.interact(egui::Sense::click()).clicked();

        if key_triggered || surface_clicked {
            self.session.trigger_draw(now);
        }

        // Keep repainting toward the pending reveal so it fires without
        // further input.
        if let Some(deadline) = self.session.deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
