use eframe::egui;

use crate::core::{
    groups::{
        self,
        GroupFamily,
    },
    settings::{
        DrillMode,
        KanaVariant,
        Settings,
        SettingsPatch,
    },
};

/// The settings sidebar. While open it owns its side of the screen, so
/// clicks on it never reach the drill surface; the caller additionally
/// gates the draw triggers on `is_open`.
pub struct SettingsPanel {
    open: bool,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Renders the panel and reports what the user changed this frame.
    /// Group toggles send a full-replacement map for their family.
    pub fn show(&mut self, ctx: &egui::Context, settings: &Settings) -> Option<SettingsPatch> {
        if !self.open {
            return None;
        }

        let mut patch: Option<SettingsPatch> = None;
        let mut close_clicked = false;

        egui::SidePanel::left("settings_panel").resizable(false).default_width(240.0).show(
            ctx,
            |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.heading("Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        close_clicked = ui.button("✖").clicked();
                    });
                });
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Delay (ms):");
                    let mut delay = settings.delay;
                    if ui
                        .add(egui::DragValue::new(&mut delay).speed(50).range(0..=60_000))
                        .changed()
                    {
                        patch.get_or_insert_with(Default::default).delay = Some(delay);
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Kana:");
                    let mut variant = settings.kana_variant;
                    egui::ComboBox::from_id_salt("kana_variant_combo")
                        .selected_text(variant_text(variant))
                        .show_ui(ui, |ui| {
                            for option in
                                [KanaVariant::Hiragana, KanaVariant::Katakana, KanaVariant::Both]
                            {
                                ui.selectable_value(&mut variant, option, variant_text(option));
                            }
                        });
                    if variant != settings.kana_variant {
                        patch.get_or_insert_with(Default::default).kana_variant = Some(variant);
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Direction:");
                    let mut mode = settings.mode;
                    ui.selectable_value(&mut mode, DrillMode::PromptToAnswer, "Romaji first");
                    ui.selectable_value(&mut mode, DrillMode::AnswerToPrompt, "Kana first");
                    if mode != settings.mode {
                        patch.get_or_insert_with(Default::default).mode = Some(mode);
                    }
                });

                ui.add_space(12.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.strong("Pronounces:");
                    if let Some(map) =
                        ui_group_toggles(ui, &settings.selected_syllables, GroupFamily::Unvoiced)
                    {
                        patch.get_or_insert_with(Default::default).selected_syllables = Some(map);
                    }

                    ui.add_space(8.0);
                    ui.strong("Voiced:");
                    if let Some(map) = ui_group_toggles(
                        ui,
                        &settings.selected_voiced_syllables,
                        GroupFamily::Voiced,
                    ) {
                        patch.get_or_insert_with(Default::default).selected_voiced_syllables =
                            Some(map);
                    }
                });
            },
        );

        if close_clicked {
            self.open = false;
        }

        patch
    }
}

fn ui_group_toggles(
    ui: &mut egui::Ui,
    current: &std::collections::HashMap<String, bool>,
    family: GroupFamily,
) -> Option<std::collections::HashMap<String, bool>> {
    let mut replacement = None;

    for group in groups::of_family(family) {
        let mut enabled = current.get(group.id).copied().unwrap_or(false);
        if ui.checkbox(&mut enabled, group.label).changed() {
            let mut map = current.clone();
            map.insert(group.id.to_string(), enabled);
            replacement = Some(map);
        }
    }

    replacement
}

fn variant_text(variant: KanaVariant) -> &'static str {
    match variant {
        KanaVariant::Hiragana => "Hiragana",
        KanaVariant::Katakana => "Katakana",
        KanaVariant::Both => "Both",
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}
