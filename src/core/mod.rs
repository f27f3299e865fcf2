pub mod draw;
pub mod errors;
pub mod groups;
pub mod kana;
pub mod reveal;
pub mod session;
pub mod settings;

pub use errors::KanadrillError;
pub use kana::{ Glyph, SyllableKey };
pub use reveal::RevealPhase;
pub use session::DrillSession;
pub use settings::{ DrillMode, KanaVariant, Settings, SettingsPatch, SettingsStore };
