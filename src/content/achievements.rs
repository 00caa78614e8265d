//! Achievement badges unlocked from overall progress

use crate::progress::ProgressSnapshot;

#[derive(Debug)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    condition: fn(&ProgressSnapshot) -> bool,
}

impl Achievement {
    pub fn is_met(&self, progress: &ProgressSnapshot) -> bool {
        (self.condition)(progress)
    }
}

pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        id: "first_steps",
        title: "Premiers Pas",
        description: "Atteignez 100 points",
        icon: "🎯",
        condition: |p| p.total_score >= 100,
    },
    Achievement {
        id: "explorer",
        title: "Explorateur",
        description: "Découvrez 5 pionnières",
        icon: "⭐",
        condition: |p| p.discoveries >= 5,
    },
    Achievement {
        id: "master",
        title: "Maître du Jeu",
        description: "Atteignez le niveau 5",
        icon: "👑",
        condition: |p| p.level >= 5,
    },
    Achievement {
        id: "collector",
        title: "Collectionneur",
        description: "Découvrez toutes les pionnières (10)",
        icon: "🏆",
        condition: |p| p.discoveries >= 10,
    },
    Achievement {
        id: "legend",
        title: "Légende",
        description: "Atteignez 1000 points",
        icon: "🌟",
        condition: |p| p.total_score >= 1000,
    },
    Achievement {
        id: "quiz_master",
        title: "Maître du Quiz",
        description: "Répondez correctement à toutes les questions",
        icon: "🧠",
        // Six correct answers are worth 300 points
        condition: |p| p.total_score >= 300,
    },
];

/// Remembers which badges were already announced during this session
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: [bool; ACHIEVEMENTS.len()],
}

impl AchievementTracker {
    /// Badges newly satisfied by `progress`, each reported once
    pub fn evaluate(&mut self, progress: &ProgressSnapshot) -> Vec<&'static Achievement> {
        let mut fresh = Vec::new();
        for (done, achievement) in self.unlocked.iter_mut().zip(ACHIEVEMENTS.iter()) {
            if !*done && achievement.is_met(progress) {
                *done = true;
                log::info!("Achievement unlocked: {}", achievement.id);
                fresh.push(achievement);
            }
        }
        fresh
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        ACHIEVEMENTS
            .iter()
            .zip(self.unlocked)
            .any(|(a, done)| done && a.id == id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|u| **u).count()
    }
}
