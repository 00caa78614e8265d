//! Transient toast notifications
//!
//! Entries expire a fixed time after they are pushed; the host calls
//! [`Notifications::expire`] with the same clock it feeds the simulation.

use crate::consts::NOTIFICATION_MS;
use crate::sim::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

impl NotificationKind {
    /// CSS class and icon used by the toast container
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Info => "ℹ",
            NotificationKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    entries: Vec<Notification>,
    duration_ms: f64,
    next_id: u32,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_MS)
    }
}

impl Notifications {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            entries: Vec::new(),
            duration_ms,
            next_id: 1,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: f64) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at_ms: now_ms + self.duration_ms,
        });
        id
    }

    /// Drop expired entries; returns true if anything was removed
    pub fn expire(&mut self, now_ms: f64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at_ms > now_ms);
        self.entries.len() != before
    }

    /// Close one notification early
    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GameEvent {
    /// Toast for this event, if it gets one
    pub fn notification(&self) -> Option<(String, NotificationKind)> {
        use NotificationKind::*;

        match self {
            GameEvent::Started => Some(("🎮 Jeu démarré!".to_string(), Success)),
            GameEvent::Reset => Some(("🔄 Partie réinitialisée".to_string(), Info)),
            GameEvent::PauseToggled { paused: true } => Some(("⏸️ En pause".to_string(), Info)),
            GameEvent::PauseToggled { paused: false } => Some(("▶️ Repris".to_string(), Info)),
            GameEvent::ComboMilestone { combo } => {
                Some((format!("🔥 COMBO x{}!", combo), Success))
            }
            GameEvent::ObstacleHit { health: 0 } => None,
            GameEvent::ObstacleHit { health } => {
                let plural = if *health > 1 { "s" } else { "" };
                Some((
                    format!("⚠️ {} vie{} restante{}", health, plural, plural),
                    Warning,
                ))
            }
            GameEvent::GameOver { .. } => Some((
                "💔 Game Over! Appuyez sur R pour recommencer".to_string(),
                Warning,
            )),
            GameEvent::StarCollected { fact, .. } => {
                Some((format!("⭐ BONUS! {}", fact), Success))
            }
            GameEvent::ItemCollected { .. } => None,
        }
    }
}
