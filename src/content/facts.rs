//! Bonus facts surfaced when a star is collected

pub const BONUS_FACTS: [&str; 4] = [
    "30% des développeurs de jeux vidéo sont des femmes",
    "46% des joueurs dans le monde sont des femmes",
    "Le premier jeu vidéo narratif a été créé par Roberta Williams",
    "Centipede a été co-créé par Dona Bailey en 1981",
];

/// Headline statistics shown on the landing page
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 46, suffix: "%", label: "DE JOUEUSES DANS LE MONDE" },
    Stat { value: 30, suffix: "%", label: "DE DÉVELOPPEUSES DANS L'INDUSTRIE" },
    Stat { value: 5, suffix: "B", label: "DE FEMMES JOUENT RÉGULIÈREMENT" },
    Stat { value: 67, suffix: "%", label: "DES FEMMES JOUENT SUR MOBILE" },
];

impl Stat {
    /// Counter text at `step` of a 50-step count-up animation
    pub fn count_up(&self, step: u32) -> String {
        let shown = if step >= 50 {
            self.value
        } else {
            self.value * step / 50
        };
        format!("{}{}", shown, self.suffix)
    }
}
