//! Site content sections
//!
//! Static data tables plus small state machines for the interactive parts.
//! Every interaction reports points and discoveries through a
//! [`ProgressSink`](crate::progress::ProgressSink); presentation is left to
//! the host page.

pub mod achievements;
pub mod facts;
pub mod konami;
pub mod pioneers;
pub mod quiz;
pub mod timeline;

pub use achievements::{ACHIEVEMENTS, Achievement, AchievementTracker};
pub use konami::KonamiDetector;
pub use pioneers::{PIONEERS, Pioneer, PioneerGallery};
pub use quiz::{QUESTIONS, Question, QuizOutcome, QuizState};
pub use timeline::{TIMELINE, TimelineEntry, TimelineState};

/// What a click on a revealable card did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First visit: points and a discovery were awarded
    Revealed { points: u64 },
    /// Already revealed: the detail panel was opened
    Expanded,
    /// Already revealed: the detail panel was closed
    Collapsed,
}

impl RevealOutcome {
    /// Name handed to the page script
    pub fn label(self) -> &'static str {
        match self {
            RevealOutcome::Revealed { .. } => "revealed",
            RevealOutcome::Expanded => "expanded",
            RevealOutcome::Collapsed => "collapsed",
        }
    }
}

/// Reveal/expand bookkeeping shared by the timeline and the pioneer gallery
#[derive(Debug, Clone, Default)]
pub(crate) struct RevealSet {
    revealed: Vec<bool>,
    expanded: Option<usize>,
}

impl RevealSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
            expanded: None,
        }
    }

    /// `None` when the index is out of range
    pub(crate) fn select(&mut self, index: usize, points: u64) -> Option<RevealOutcome> {
        let seen = self.revealed.get_mut(index)?;
        if !*seen {
            *seen = true;
            return Some(RevealOutcome::Revealed { points });
        }
        if self.expanded == Some(index) {
            self.expanded = None;
            Some(RevealOutcome::Collapsed)
        } else {
            self.expanded = Some(index);
            Some(RevealOutcome::Expanded)
        }
    }

    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub(crate) fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
