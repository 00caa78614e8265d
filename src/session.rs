//! One browser session of the mini-game
//!
//! Ties the simulation to its collaborators: keyboard input, the progress
//! store, toast notifications, achievements and the Konami easter egg. The
//! page shell forwards DOM events here and calls [`Session::frame`] once per
//! animation frame. Clicks in the quiz, timeline and pioneer sections land
//! here too so that every section reports to the same store.

use crate::content::konami::{ACTIVATED_MESSAGE, EASTER_EGG_MESSAGE, KonamiDetector};
use crate::content::{
    AchievementTracker, PioneerGallery, QuizOutcome, QuizState, RevealOutcome, TimelineState,
};
use crate::notify::{NotificationKind, Notifications};
use crate::platform::KeyValueStore;
use crate::progress::ProgressStore;
use crate::renderer::{self, Surface};
use crate::sim::{Controls, GameState, Key, tick};
use crate::tuning::Tuning;

pub struct Session<S: KeyValueStore> {
    state: GameState,
    controls: Controls,
    progress: ProgressStore<S>,
    notifications: Notifications,
    achievements: AchievementTracker,
    konami: KonamiDetector,
    quiz: QuizState,
    timeline: TimelineState,
    pioneers: PioneerGallery,
    /// Notifications changed outside of a frame
    dirty: bool,
}

/// Toast shown when the share text went to the clipboard
pub const COPIED_MESSAGE: &str = "✓ COPIÉ!";

impl<S: KeyValueStore> Session<S> {
    pub fn new(seed: u64, storage: S) -> Self {
        Self::with_tuning(seed, Tuning::default(), storage)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, storage: S) -> Self {
        let notifications = Notifications::new(tuning.notification_ms);
        let progress = ProgressStore::load(storage);
        let mut achievements = AchievementTracker::default();
        // Badges earned in earlier visits are not announced again
        achievements.evaluate(&progress.snapshot());

        Self {
            state: GameState::with_tuning(seed, tuning),
            controls: Controls::default(),
            progress,
            notifications,
            achievements,
            konami: KonamiDetector::default(),
            quiz: QuizState::default(),
            timeline: TimelineState::default(),
            pioneers: PioneerGallery::default(),
            dirty: false,
        }
    }

    /// Handle a `keydown` with the DOM key name. Returns true when the
    /// browser default should be prevented.
    pub fn key_down(&mut self, dom_key: &str, now_ms: f64) -> bool {
        if self.konami.push_and_reward(dom_key, &mut self.progress) {
            self.notifications
                .push(ACTIVATED_MESSAGE, NotificationKind::Success, now_ms);
            self.notifications
                .push(EASTER_EGG_MESSAGE, NotificationKind::Info, now_ms);
            self.dirty = true;
        }
        match Key::from_dom_key(dom_key) {
            Some(key) => self.controls.key_down(key, self.state.run.running),
            None => false,
        }
    }

    pub fn key_up(&mut self, dom_key: &str) {
        if let Some(key) = Key::from_dom_key(dom_key) {
            self.controls.key_up(key);
        }
    }

    /// Window lost focus; held keys would otherwise stick
    pub fn blur(&mut self) {
        self.controls.release_all();
    }

    /// Advance one animation frame. Returns true when the visible set of
    /// notifications changed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let input = self.controls.sample(now_ms);
        tick(&mut self.state, &input, &mut self.progress);

        let mut changed = std::mem::take(&mut self.dirty);
        for event in self.state.drain_events() {
            if let Some((message, kind)) = event.notification() {
                self.notifications.push(message, kind, now_ms);
                changed = true;
            }
        }
        for achievement in self.achievements.evaluate(&self.progress.snapshot()) {
            self.notifications.push(
                format!("{} Achievement débloqué: {}", achievement.icon, achievement.title),
                NotificationKind::Success,
                now_ms,
            );
            changed = true;
        }
        self.notifications.expire(now_ms) || changed
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        renderer::render(&self.state, surface);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    /// Content sections report through the same store as the game
    pub fn progress_mut(&mut self) -> &mut ProgressStore<S> {
        &mut self.progress
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self, id: u32) {
        self.notifications.dismiss(id);
        self.dirty = true;
    }

    pub fn answer_quiz(&mut self, question: usize, option: usize) -> Option<QuizOutcome> {
        self.quiz.answer(question, option, &mut self.progress)
    }

    pub fn select_timeline(&mut self, index: usize) -> Option<RevealOutcome> {
        self.timeline.select(index, &mut self.progress)
    }

    pub fn reveal_pioneer(&mut self, index: usize) -> Option<RevealOutcome> {
        self.pioneers.reveal(index, &mut self.progress)
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn pioneers(&self) -> &PioneerGallery {
        &self.pioneers
    }

    /// Zero the persisted progress. Badges can then be earned, and
    /// announced, again.
    pub fn reset_progress(&mut self) {
        self.progress.reset_progress();
        self.achievements = AchievementTracker::default();
    }

    /// Text offered to the share sheet or copied to the clipboard
    pub fn share_text(&self) -> String {
        self.progress.snapshot().share_text()
    }

    /// The share text was copied instead of shared
    pub fn notify_copied(&mut self, now_ms: f64) {
        self.notifications
            .push(COPIED_MESSAGE, NotificationKind::Success, now_ms);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::konami::KONAMI_SEQUENCE;
    use crate::platform::MemoryStore;
    use crate::progress::STORAGE_KEY;
    use crate::renderer::DisplayList;

    fn session() -> Session<MemoryStore> {
        Session::new(99, MemoryStore::new())
    }

    #[test]
    fn test_start_notifies() {
        let mut s = session();
        assert!(!s.key_down("Enter", 0.0));
        assert!(s.frame(16.0));
        assert!(s.state().run.running);
        assert_eq!(s.notifications().active()[0].message, "🎮 Jeu démarré!");

        // Toast gone after its lifetime
        assert!(s.frame(16.0 + 3000.0));
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_space_prevented_only_while_running() {
        let mut s = session();
        assert!(!s.key_down(" ", 0.0));
        s.key_down("Enter", 0.0);
        s.frame(16.0);
        assert!(s.key_down(" ", 32.0));
        assert!(!s.key_down("x", 32.0));
    }

    #[test]
    fn test_blur_releases_held_keys() {
        let mut s = session();
        s.key_down("Enter", 0.0);
        s.frame(0.0);
        let start_x = s.state().player.pos.x;

        s.key_down("ArrowRight", 1.0);
        s.blur();
        s.frame(17.0);
        assert_eq!(s.state().player.pos.x, start_x);
    }

    #[test]
    fn test_konami_awards_points() {
        let mut s = session();
        for key in KONAMI_SEQUENCE {
            s.key_down(key, 0.0);
        }
        assert_eq!(s.progress().total_score(), 100);
        let messages: Vec<&str> = s
            .notifications()
            .active()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec![ACTIVATED_MESSAGE, EASTER_EGG_MESSAGE]);
        // First achievement is announced on the next frame
        assert!(s.frame(10.0));
        assert!(
            s.notifications()
                .active()
                .iter()
                .any(|n| n.message.contains("Premiers Pas"))
        );
    }

    #[test]
    fn test_earlier_achievements_stay_quiet() {
        let mut storage = MemoryStore::new();
        storage
            .set_item(STORAGE_KEY, r#"{"totalScore": 500, "discoveries": 6}"#)
            .unwrap();
        let mut s = Session::new(1, storage);
        assert!(!s.frame(0.0));
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_close_button_dismisses_toast() {
        let mut s = session();
        s.key_down("Enter", 0.0);
        s.frame(16.0);
        let id = s.notifications().active()[0].id;

        s.dismiss_notification(id);
        assert!(s.notifications().is_empty());
        // The next frame reports the change so the page redraws the toasts
        assert!(s.frame(32.0));
        assert!(!s.frame(48.0));
    }

    #[test]
    fn test_content_sections_share_the_store() {
        let mut s = session();
        let correct = crate::content::QUESTIONS[0].correct;
        let outcome = s.answer_quiz(0, correct).unwrap();
        assert!(outcome.correct);
        assert_eq!(s.answer_quiz(0, correct), None);
        assert_eq!(
            s.select_timeline(0),
            Some(RevealOutcome::Revealed { points: 15 })
        );
        assert_eq!(
            s.reveal_pioneer(1),
            Some(RevealOutcome::Revealed { points: 25 })
        );
        assert_eq!(s.reveal_pioneer(99), None);

        assert_eq!(s.progress().total_score(), 50 + 15 + 25);
        assert_eq!(s.progress().discoveries(), 3);
        assert_eq!(s.quiz().answered(), 1);
        assert!(s.timeline().is_highlighted(0));
        assert_eq!(s.pioneers().revealed_count(), 1);
        assert!(
            s.progress()
                .storage()
                .get_item(STORAGE_KEY)
                .unwrap()
                .is_some_and(|raw| raw.contains("\"totalScore\":90"))
        );
    }

    #[test]
    fn test_reset_progress_reannounces_badges() {
        let mut s = session();
        let answer_right = |s: &mut Session<MemoryStore>, q: usize| {
            let correct = crate::content::QUESTIONS[q].correct;
            s.answer_quiz(q, correct)
        };
        let badges = |s: &Session<MemoryStore>| {
            s.notifications()
                .active()
                .iter()
                .filter(|n| n.message.contains("Premiers Pas"))
                .count()
        };

        answer_right(&mut s, 0);
        answer_right(&mut s, 1);
        assert!(s.frame(0.0));
        assert_eq!(badges(&s), 1);

        s.reset_progress();
        assert_eq!(s.progress().total_score(), 0);
        assert_eq!(s.progress().discoveries(), 0);
        assert!(s.share_text().contains("marqué 0 points et découvert 0/10"));

        answer_right(&mut s, 2);
        answer_right(&mut s, 3);
        s.frame(10.0);
        assert_eq!(badges(&s), 2);
    }

    #[test]
    fn test_share_text_and_copied_toast() {
        let mut s = session();
        s.select_timeline(3);
        assert_eq!(
            s.share_text(),
            "🎮 J'ai marqué 15 points et découvert 1/10 faits sur les femmes dans le gaming! #NuitDeLInfo #WomenInGaming"
        );
        s.notify_copied(5.0);
        assert_eq!(s.notifications().active()[0].message, COPIED_MESSAGE);
        assert!(s.frame(6.0));
    }

    #[test]
    fn test_short_canvas_runs_without_panicking() {
        let tuning = Tuning {
            canvas_height: 200.0,
            ..Tuning::default()
        };
        let mut s = Session::with_tuning(3, tuning, MemoryStore::new());
        s.key_down("Enter", 0.0);
        for frame in 0..120 {
            s.frame(16.0 * frame as f64);
        }
        assert!(s.state().items.iter().all(|i| i.pos.y >= 50.0));
    }

    #[test]
    fn test_draw_uses_renderer() {
        let s = session();
        let mut list = DisplayList::default();
        s.draw(&mut list);
        assert!(list.has_text("PRESS ENTER TO START"));
    }
}
