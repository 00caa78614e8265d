//! Pioneer gallery

use super::{RevealOutcome, RevealSet};
use crate::progress::ProgressSink;

/// Points for revealing a pioneer card the first time
pub const REVEAL_POINTS: u64 = 25;

#[derive(Debug)]
pub struct Pioneer {
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub achievements: [&'static str; 4],
    pub years: &'static str,
    pub quote: &'static str,
}

pub const PIONEERS: [Pioneer; 8] = [
    Pioneer {
        name: "ROBERTA WILLIAMS",
        full_name: "Roberta Williams",
        description: "Créatrice de King's Quest et pionnière des jeux d'aventure graphiques. Elle a révolutionné le storytelling dans les jeux vidéo.",
        achievements: [
            "Créatrice de King's Quest (1984)",
            "Co-fondatrice de Sierra On-Line",
            "Pionnière du genre adventure game",
            "Plus de 30 jeux à son actif",
        ],
        years: "1980s - 1990s",
        quote: "Les jeux vidéo peuvent raconter des histoires aussi bien que les livres ou les films.",
    },
    Pioneer {
        name: "CAROL SHAW",
        full_name: "Carol Shaw",
        description: "Première femme game designer professionnelle. Créatrice de River Raid sur Atari 2600, l'un des premiers jeux à succès.",
        achievements: [
            "Première femme game designer professionnelle",
            "Créatrice de River Raid (1982)",
            "Programmeuse chez Atari",
            "Pionnière des années 70-80",
        ],
        years: "1978 - 1984",
        quote: "J'ai toujours aimé les jeux vidéo, même quand c'était un monde d'hommes.",
    },
    Pioneer {
        name: "DONA BAILEY",
        full_name: "Dona Bailey",
        description: "Co-créatrice de Centipede (1981), l'un des rares jeux d'arcade des années 80 créé par une femme.",
        achievements: [
            "Co-créatrice de Centipede",
            "Un des jeux d'arcade les plus vendus",
            "Programmeuse chez Atari",
            "Inspiration pour les générations futures",
        ],
        years: "1980 - 1982",
        quote: "Centipede était mon bébé, je l'ai créé avec passion.",
    },
    Pioneer {
        name: "AMY HENNIG",
        full_name: "Amy Hennig",
        description: "Scénariste et réalisatrice de la série Uncharted. Pionnière dans la narration cinématographique des jeux vidéo.",
        achievements: [
            "Directrice créative d'Uncharted",
            "Pionnière de la narration cinématographique",
            "Plusieurs récompenses BAFTA",
            "Influence majeure dans l'industrie AAA",
        ],
        years: "1989 - Présent",
        quote: "Les jeux vidéo sont l'art narratif le plus immersif qui existe.",
    },
    Pioneer {
        name: "KIM SWIFT",
        full_name: "Kim Swift",
        description: "Designer principale de Portal. A révolutionné le genre puzzle-platformer avec des mécaniques innovantes.",
        achievements: [
            "Designer principale de Portal",
            "Révolution du puzzle-platformer",
            "Game of the Year 2007",
            "Innovation dans le game design",
        ],
        years: "2005 - Présent",
        quote: "Portal a changé la façon dont on pense aux puzzles dans les jeux.",
    },
    Pioneer {
        name: "JADE RAYMOND",
        full_name: "Jade Raymond",
        description: "Productrice d'Assassin's Creed. Figure majeure de l'industrie AAA et fondatrice de plusieurs studios.",
        achievements: [
            "Productrice d'Assassin's Creed",
            "Fondatrice de plusieurs studios",
            "Figure majeure de l'industrie AAA",
            "Mentor pour les femmes dans le gaming",
        ],
        years: "2004 - Présent",
        quote: "L'industrie du jeu vidéo a besoin de plus de diversité.",
    },
    Pioneer {
        name: "BRENDA ROMERO",
        full_name: "Brenda Romero",
        description: "Game designer légendaire, créatrice de la série Wizardry et professeure renommée.",
        achievements: [
            "Créatrice de la série Wizardry",
            "Plus de 50 jeux créés",
            "Professeur et conférencière",
            "Championne de la diversité",
        ],
        years: "1981 - Présent",
        quote: "Les jeux peuvent changer le monde en racontant de meilleures histoires.",
    },
    Pioneer {
        name: "MURIEL TRAMIS",
        full_name: "Muriel Tramis",
        description: "Première game designer française, créatrice de jeux d'aventure innovants dans les années 80-90.",
        achievements: [
            "Première game designer française",
            "Créatrice de Gobliiins",
            "Pionnière française du gaming",
            "Innovation dans l'aventure",
        ],
        years: "1987 - 2000",
        quote: "J'ai ouvert la voie pour les femmes françaises dans le gaming.",
    },
];

/// Which cards are revealed and which one is expanded
#[derive(Debug, Clone)]
pub struct PioneerGallery {
    cards: RevealSet,
}

impl Default for PioneerGallery {
    fn default() -> Self {
        Self {
            cards: RevealSet::new(PIONEERS.len()),
        }
    }
}

impl PioneerGallery {
    /// Click on card `index`. The first click awards a discovery and points.
    pub fn reveal(
        &mut self,
        index: usize,
        progress: &mut dyn ProgressSink,
    ) -> Option<RevealOutcome> {
        let outcome = self.cards.select(index, REVEAL_POINTS)?;
        if let RevealOutcome::Revealed { points } = outcome {
            log::info!("Revealed pioneer {}", PIONEERS[index].full_name);
            progress.on_score_update(points);
            progress.on_discovery();
        }
        Some(outcome)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.cards.is_revealed(index)
    }

    pub fn expanded(&self) -> Option<&'static Pioneer> {
        self.cards.expanded().map(|i| &PIONEERS[i])
    }

    pub fn revealed_count(&self) -> usize {
        self.cards.revealed_count()
    }
}
