use std::time::{
    Duration,
    Instant,
};

use rand::rngs::ThreadRng;

use super::{
    draw,
    kana::{
        self,
        Glyph,
        SyllableKey,
    },
    reveal::{
        RevealPhase,
        RevealScheduler,
    },
    settings::{
        DrillMode,
        Settings,
        SettingsPatch,
        SettingsStore,
    },
};

/// One drill session: the settings store, the reveal scheduler, the
/// last-drawn key and the random source, wired together behind a single
/// owner. The presentation layer only reads the view accessors and feeds
/// in triggers.
pub struct DrillSession {
    store: SettingsStore,
    scheduler: RevealScheduler,
    last_key: Option<SyllableKey>,
    rng: ThreadRng,
}

impl DrillSession {
    /// Loads persisted settings and starts idle.
    pub fn new() -> Self {
        let mut store = SettingsStore::new();
        store.load();
        Self::with_store(store)
    }

    pub fn with_store(store: SettingsStore) -> Self {
        Self { store, scheduler: RevealScheduler::new(), last_key: None, rng: rand::rng() }
    }

    pub fn settings(&self) -> &Settings {
        self.store.get()
    }

    /// Draws the next syllable and starts a reveal cycle. With nothing
    /// eligible this is a no-op: the previous display state stays as it is.
    pub fn trigger_draw(&mut self, now: Instant) -> Option<SyllableKey> {
        let key = draw::draw(self.store.get(), self.last_key, &mut self.rng)?;
        self.last_key = Some(key);

        let delay = Duration::from_millis(self.store.get().delay);
        self.scheduler.begin(key, delay, now);
        Some(key)
    }

    /// Applies a settings patch. Switching the drill direction clears both
    /// displayed sides and cancels any pending reveal.
    pub fn apply(&mut self, patch: SettingsPatch) {
        let mode_switched =
            patch.mode.is_some_and(|mode| mode != self.store.get().mode);

        self.store.update(patch);

        if mode_switched {
            self.scheduler.reset();
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.scheduler.tick(now)
    }

    pub fn phase(&self) -> RevealPhase {
        self.scheduler.phase()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// The romaji side, when visible: from the first phase in
    /// prompt-to-answer mode, only after the reveal in answer-to-prompt.
    pub fn prompt_key(&self) -> Option<SyllableKey> {
        let key = self.scheduler.drawn_key()?;
        match (self.store.get().mode, self.scheduler.phase()) {
            (_, RevealPhase::Idle) => None,
            (DrillMode::PromptToAnswer, _) => Some(key),
            (DrillMode::AnswerToPrompt, RevealPhase::AnswerRevealed) => Some(key),
            (DrillMode::AnswerToPrompt, RevealPhase::PromptShown) => None,
        }
    }

    /// The kana side, when visible; the mirror of `prompt_key`.
    pub fn answer_glyph(&self) -> Option<&'static Glyph> {
        let key = self.scheduler.drawn_key()?;
        let visible = match (self.store.get().mode, self.scheduler.phase()) {
            (_, RevealPhase::Idle) => false,
            (DrillMode::PromptToAnswer, RevealPhase::AnswerRevealed) => true,
            (DrillMode::PromptToAnswer, RevealPhase::PromptShown) => false,
            (DrillMode::AnswerToPrompt, _) => true,
        };
        if visible {
            kana::glyph(key)
        } else {
            None
        }
    }
}

impl Default for DrillSession {
    fn default() -> Self {
        Self::new()
    }
}
