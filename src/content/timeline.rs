//! Historical timeline

use super::{RevealOutcome, RevealSet};
use crate::progress::ProgressSink;

/// Points for highlighting a timeline entry the first time
pub const HIGHLIGHT_POINTS: u64 = 15;

#[derive(Debug)]
pub struct TimelineEntry {
    pub year: u16,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 3],
}

pub const TIMELINE: [TimelineEntry; 8] = [
    TimelineEntry {
        year: 1978,
        icon: "👩‍💻",
        title: "L'ÈRE COMMENCE",
        description: "Carol Shaw rejoint Atari comme la première femme game designer professionnelle",
        details: [
            "Première femme game designer professionnelle",
            "Création de jeux pour Atari 2600",
            "Ouverture de la voie pour les générations futures",
        ],
    },
    TimelineEntry {
        year: 1981,
        icon: "🕹️",
        title: "CENTIPEDE",
        description: "Dona Bailey co-crée Centipede, devenant l'un des jeux d'arcade les plus populaires",
        details: [
            "Plus de 55 000 machines d'arcade vendues",
            "Un des jeux les plus joués des années 80",
            "Inspiration pour de nombreux jeux futurs",
        ],
    },
    TimelineEntry {
        year: 1984,
        icon: "📖",
        title: "RÉVOLUTION NARRATIVE",
        description: "Roberta Williams lance King's Quest, définissant le genre adventure game",
        details: [
            "Premier jeu d'aventure graphique",
            "Révolution du storytelling interactif",
            "Série vendue à des millions d'exemplaires",
        ],
    },
    TimelineEntry {
        year: 1987,
        icon: "🇫🇷",
        title: "PREMIÈRE FRANÇAISE",
        description: "Muriel Tramis devient la première game designer française professionnelle",
        details: [
            "Création de Gobliiins",
            "Pionnière française du gaming",
            "Innovation dans l'humour et l'aventure",
        ],
    },
    TimelineEntry {
        year: 2004,
        icon: "🎬",
        title: "L'ÈRE AAA",
        description: "Jade Raymond produit Assassin's Creed, marquant l'entrée des femmes dans les blockbusters",
        details: [
            "Franchise vendue à plus de 200 millions",
            "Influence majeure dans l'industrie AAA",
            "Inspiration pour les femmes développeuses",
        ],
    },
    TimelineEntry {
        year: 2007,
        icon: "⭐",
        title: "NOUVELLE ÈRE",
        description: "Kim Swift révolutionne le puzzle-platformer avec Portal",
        details: [
            "Game of the Year 2007",
            "Innovation majeure dans le game design",
            "Influence durable sur l'industrie",
        ],
    },
    TimelineEntry {
        year: 2010,
        icon: "🎥",
        title: "NARRATION CINÉMATIQUE",
        description: "Amy Hennig élève la narration dans Uncharted à un niveau cinématographique",
        details: [
            "Série acclamée par la critique",
            "Plusieurs récompenses BAFTA",
            "Nouveau standard pour la narration",
        ],
    },
    TimelineEntry {
        year: 2024,
        icon: "🚀",
        title: "AUJOURD'HUI",
        description: "Les femmes représentent 46% des joueurs et continuent d'innover dans l'industrie",
        details: [
            "46% de joueuses dans le monde",
            "30% de développeuses dans l'industrie",
            "Croissance continue de la diversité",
        ],
    },
];

#[derive(Debug, Clone)]
pub struct TimelineState {
    entries: RevealSet,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            entries: RevealSet::new(TIMELINE.len()),
        }
    }
}

impl TimelineState {
    /// Click on entry `index`. The first click awards a discovery and points;
    /// later clicks toggle the detail list.
    pub fn select(
        &mut self,
        index: usize,
        progress: &mut dyn ProgressSink,
    ) -> Option<RevealOutcome> {
        let outcome = self.entries.select(index, HIGHLIGHT_POINTS)?;
        if let RevealOutcome::Revealed { points } = outcome {
            log::info!("Highlighted timeline year {}", TIMELINE[index].year);
            progress.on_score_update(points);
            progress.on_discovery();
        }
        Some(outcome)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.entries.is_revealed(index)
    }

    pub fn expanded(&self) -> Option<&'static TimelineEntry> {
        self.entries.expanded().map(|i| &TIMELINE[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::tests::Tally;

    #[test]
    fn test_chronological() {
        assert!(TIMELINE.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_select_then_toggle() {
        let mut timeline = TimelineState::default();
        let mut tally = Tally::default();

        assert_eq!(
            timeline.select(2, &mut tally),
            Some(RevealOutcome::Revealed { points: 15 })
        );
        assert!(timeline.expanded().is_none());
        assert_eq!(timeline.select(2, &mut tally), Some(RevealOutcome::Expanded));
        assert_eq!(timeline.expanded().map(|e| e.year), Some(1984));
        assert_eq!(timeline.select(2, &mut tally), Some(RevealOutcome::Collapsed));

        assert_eq!(tally.points, 15);
        assert_eq!(tally.discoveries, 1);
        assert!(timeline.is_highlighted(2));
    }
}
