use eframe::egui;
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    details: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { details: ThemeDetails::dracula() }
    }

    /// Accent for the hiragana rendering.
    pub fn hiragana(&self) -> Color32 {
        self.details.cyan
    }

    /// Accent for the katakana rendering.
    pub fn katakana(&self) -> Color32 {
        self.details.red
    }

    /// Subdued tone for the pending-reveal placeholder and hints.
    pub fn muted(&self) -> Color32 {
        self.details.comment
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    let details = &theme.details;
    let default = Visuals::dark();

    ctx.set_visuals_of(
        egui::Theme::Dark,
        Visuals {
            dark_mode: true,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: details.background,
                    weak_bg_fill: details.background_lighter,
                    bg_stroke: Stroke {
                        color: details.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: details.background_light,
                    weak_bg_fill: details.background_lighter,
                    bg_stroke: Stroke {
                        color: details.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: details.selection,
                    weak_bg_fill: details.background_lighter,
                    bg_stroke: Stroke { color: details.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: details.selection,
                    weak_bg_fill: details.background_light,
                    bg_stroke: Stroke { color: details.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: details.background_dark,
                    weak_bg_fill: details.background_lighter,
                    bg_stroke: Stroke { color: details.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: details.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: details.selection,
                stroke: Stroke { color: details.foreground, ..default.selection.stroke },
            },
            hyperlink_color: details.cyan,
            faint_bg_color: details.background_darker,
            extreme_bg_color: details.background_darker,
            code_bg_color: details.background_dark,
            error_fg_color: details.red,
            warn_fg_color: details.orange,
            window_shadow: Shadow { color: details.background_darker, ..default.window_shadow },
            window_fill: details.background,
            window_stroke: Stroke { color: details.background_light, ..default.window_stroke },
            panel_fill: details.background_dark,
            ..default
        },
    );
}
