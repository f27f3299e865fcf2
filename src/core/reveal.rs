use std::time::{
    Duration,
    Instant,
};

use super::kana::SyllableKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    PromptShown,
    AnswerRevealed,
}

/// Drives the two-phase prompt/answer transition. The pending reveal is a
/// deadline polled once per frame; clearing the deadline is the
/// cancellation, and arming always clears first, so at most one reveal is
/// ever outstanding and a stale one can never overwrite a newer draw.
pub struct RevealScheduler {
    phase: RevealPhase,
    drawn: Option<SyllableKey>,
    deadline: Option<Instant>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self { phase: RevealPhase::Idle, drawn: None, deadline: None }
    }

    /// Starts a new cycle for a freshly drawn key: the first side becomes
    /// visible immediately, the second after `delay`.
    pub fn begin(&mut self, key: SyllableKey, delay: Duration, now: Instant) {
        self.cancel();
        self.drawn = Some(key);
        self.phase = RevealPhase::PromptShown;
        self.deadline = Some(now + delay);
    }

    /// Advances the state machine; returns `true` the one time the answer
    /// side is revealed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.phase = RevealPhase::AnswerRevealed;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending reveal without touching the displayed sides.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Mode switch or teardown: cancels the pending reveal and clears both
    /// displayed sides without starting a new draw.
    pub fn reset(&mut self) {
        self.cancel();
        self.drawn = None;
        self.phase = RevealPhase::Idle;
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn drawn_key(&self) -> Option<SyllableKey> {
        self.drawn
    }

    /// The pending deadline, for scheduling the next repaint.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn reveal_fires_at_the_deadline_exactly_once() {
        let t0 = Instant::now();
        let mut scheduler = RevealScheduler::new();
        scheduler.begin("ka", DELAY, t0);

        assert_eq!(scheduler.phase(), RevealPhase::PromptShown);
        assert!(!scheduler.tick(t0 + Duration::from_millis(1999)));
        assert_eq!(scheduler.phase(), RevealPhase::PromptShown);

        assert!(scheduler.tick(t0 + DELAY));
        assert_eq!(scheduler.phase(), RevealPhase::AnswerRevealed);

        assert!(!scheduler.tick(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn zero_delay_reveals_on_the_next_tick() {
        let t0 = Instant::now();
        let mut scheduler = RevealScheduler::new();
        scheduler.begin("a", Duration::ZERO, t0);
        assert!(scheduler.tick(t0));
    }

    #[test]
    fn a_new_draw_supersedes_the_pending_reveal() {
        let t0 = Instant::now();
        let mut scheduler = RevealScheduler::new();
        scheduler.begin("ka", DELAY, t0);

        scheduler.begin("mi", DELAY, t0 + Duration::from_millis(500));
        assert_eq!(scheduler.drawn_key(), Some("mi"));

        // The first draw's deadline passes without a reveal.
        assert!(!scheduler.tick(t0 + DELAY));
        assert_eq!(scheduler.phase(), RevealPhase::PromptShown);

        assert!(scheduler.tick(t0 + Duration::from_millis(2500)));
        assert_eq!(scheduler.phase(), RevealPhase::AnswerRevealed);
    }

    #[test]
    fn reset_clears_everything_and_no_reveal_fires() {
        let t0 = Instant::now();
        let mut scheduler = RevealScheduler::new();
        scheduler.begin("ka", DELAY, t0);

        scheduler.reset();
        assert_eq!(scheduler.phase(), RevealPhase::Idle);
        assert_eq!(scheduler.drawn_key(), None);
        assert!(!scheduler.tick(t0 + DELAY));
        assert_eq!(scheduler.phase(), RevealPhase::Idle);
    }

    #[test]
    fn cancel_keeps_the_displayed_side() {
        let t0 = Instant::now();
        let mut scheduler = RevealScheduler::new();
        scheduler.begin("ka", DELAY, t0);

        scheduler.cancel();
        assert_eq!(scheduler.phase(), RevealPhase::PromptShown);
        assert_eq!(scheduler.drawn_key(), Some("ka"));
        assert!(!scheduler.tick(t0 + DELAY));
    }
}
