use std::fs;

use eframe::{
    egui,
    epaint::text::{
        FontInsert,
        InsertFontFamily,
    },
};

// No font assets ship with the app, so a Japanese-capable font is picked
// up from the host system instead.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Regular.otf",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/usr/share/fonts/opentype/ipafont-gothic/ipag.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
];

pub fn install_japanese_font(ctx: &egui::Context) {
    for path in FONT_CANDIDATES {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };

        ctx.add_font(FontInsert::new(
            "japanese_system",
            egui::FontData::from_owned(bytes),
            vec![
                InsertFontFamily {
                    family: egui::FontFamily::Proportional,
                    priority: egui::epaint::text::FontPriority::Lowest,
                },
                InsertFontFamily {
                    family: egui::FontFamily::Monospace,
                    priority: egui::epaint::text::FontPriority::Lowest,
                },
            ],
        ));
        println!("Japanese font loaded from: {}", path);
        return;
    }

    eprintln!("No Japanese font found on this system; kana may not render.");
}
