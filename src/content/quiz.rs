//! Multiple-choice quiz
//!
//! Each question can be answered once. A correct answer awards points and a
//! discovery; a wrong one only reveals the correct option and explanation.

use crate::progress::ProgressSink;

/// Points for a correct answer
pub const CORRECT_POINTS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "FACILE",
            Difficulty::Medium => "MOYEN",
            Difficulty::Hard => "DIFFICILE",
        }
    }
}

#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

pub const QUESTIONS: [Question; 6] = [
    Question {
        prompt: "Qui a créé le premier jeu vidéo narratif \"King's Quest\" en 1984?",
        options: ["A) Carol Shaw", "B) Roberta Williams", "C) Dona Bailey", "D) Jade Raymond"],
        correct: 1,
        explanation: "Roberta Williams est la créatrice de King's Quest, un jeu révolutionnaire qui a défini le genre adventure game et a vendu des millions d'exemplaires.",
        difficulty: Difficulty::Medium,
    },
    Question {
        prompt: "Quel pourcentage de joueuses dans le monde en 2024?",
        options: ["A) 25%", "B) 35%", "C) 46%", "D) 52%"],
        correct: 2,
        explanation: "Les femmes représentent 46% des joueurs dans le monde, un chiffre en constante augmentation depuis les années 2010!",
        difficulty: Difficulty::Easy,
    },
    Question {
        prompt: "Qui a co-créé le jeu d'arcade \"Centipede\" en 1981?",
        options: ["A) Dona Bailey", "B) Amy Hennig", "C) Kim Swift", "D) Brenda Romero"],
        correct: 0,
        explanation: "Dona Bailey a co-créé Centipede, l'un des rares jeux d'arcade des années 80 créé par une femme. Le jeu a été un énorme succès avec plus de 55 000 machines vendues.",
        difficulty: Difficulty::Medium,
    },
    Question {
        prompt: "Quelle femme a été la première game designer professionnelle?",
        options: ["A) Roberta Williams", "B) Carol Shaw", "C) Dona Bailey", "D) Muriel Tramis"],
        correct: 1,
        explanation: "Carol Shaw a été la première femme game designer professionnelle, rejoignant Atari en 1978 et créant des jeux comme River Raid.",
        difficulty: Difficulty::Hard,
    },
    Question {
        prompt: "Qui a été la designer principale du jeu Portal (2007)?",
        options: ["A) Amy Hennig", "B) Kim Swift", "C) Jade Raymond", "D) Brenda Romero"],
        correct: 1,
        explanation: "Kim Swift a été la designer principale de Portal, un jeu qui a révolutionné le genre puzzle-platformer et a remporté le Game of the Year 2007.",
        difficulty: Difficulty::Medium,
    },
    Question {
        prompt: "Quel pourcentage de développeuses dans l'industrie du jeu vidéo en 2024?",
        options: ["A) 20%", "B) 25%", "C) 30%", "D) 35%"],
        correct: 2,
        explanation: "En 2024, les femmes représentent environ 30% des développeurs dans l'industrie du jeu vidéo, un chiffre en croissance constante.",
        difficulty: Difficulty::Easy,
    },
];

/// Result of answering a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: bool,
    /// Index of the right option, shown after any answer
    pub correct_option: usize,
    pub points: u64,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct QuizState {
    /// Chosen option per question
    answers: [Option<usize>; QUESTIONS.len()],
    score: u64,
}

impl QuizState {
    /// Answer `question` with `option`. Returns `None` when either index is out
    /// of range or the question was already answered.
    pub fn answer(
        &mut self,
        question: usize,
        option: usize,
        progress: &mut dyn ProgressSink,
    ) -> Option<QuizOutcome> {
        let q = QUESTIONS.get(question)?;
        if option >= q.options.len() {
            return None;
        }
        let slot = &mut self.answers[question];
        if slot.is_some() {
            return None;
        }
        *slot = Some(option);

        let correct = option == q.correct;
        let points = if correct { CORRECT_POINTS } else { 0 };
        if correct {
            self.score += points;
            progress.on_score_update(points);
            progress.on_discovery();
        }
        log::debug!("Quiz question {} answered, correct={}", question + 1, correct);

        Some(QuizOutcome {
            correct,
            correct_option: q.correct,
            points,
            explanation: q.explanation,
        })
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .zip(QUESTIONS.iter())
            .filter(|(a, q)| **a == Some(q.correct))
            .count()
    }

    /// Rounded percentage of answered questions that were right
    pub fn success_rate(&self) -> u32 {
        let answered = self.answered();
        if answered == 0 {
            return 0;
        }
        ((self.correct_count() as f64 / answered as f64) * 100.0).round() as u32
    }

    pub fn completion_percent(&self) -> u32 {
        (self.answered() * 100 / QUESTIONS.len()) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == QUESTIONS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::tests::Tally;

    #[test]
    fn test_correct_answer_rewards() {
        let mut quiz = QuizState::default();
        let mut tally = Tally::default();

        let outcome = quiz.answer(0, 1, &mut tally).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points, 50);
        assert_eq!(tally.points, 50);
        assert_eq!(tally.discoveries, 1);
        assert_eq!(quiz.score(), 50);
    }

    #[test]
    fn test_wrong_answer_reveals_correct_option() {
        let mut quiz = QuizState::default();
        let mut tally = Tally::default();

        let outcome = quiz.answer(2, 3, &mut tally).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_option, 0);
        assert_eq!(tally.points, 0);
        assert_eq!(tally.discoveries, 0);
    }

    #[test]
    fn test_answer_only_once() {
        let mut quiz = QuizState::default();
        let mut tally = Tally::default();

        quiz.answer(1, 0, &mut tally);
        assert!(quiz.answer(1, 2, &mut tally).is_none());
        assert_eq!(quiz.selected(1), Some(0));
        assert_eq!(tally.points, 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut quiz = QuizState::default();
        let mut tally = Tally::default();
        assert!(quiz.answer(6, 0, &mut tally).is_none());
        assert!(quiz.answer(0, 4, &mut tally).is_none());
        assert_eq!(quiz.answered(), 0);
    }

    #[test]
    fn test_stats() {
        let mut quiz = QuizState::default();
        let mut tally = Tally::default();
        assert_eq!(quiz.success_rate(), 0);

        quiz.answer(0, 1, &mut tally);
        quiz.answer(1, 2, &mut tally);
        quiz.answer(2, 1, &mut tally);
        assert_eq!(quiz.answered(), 3);
        assert_eq!(quiz.correct_count(), 2);
        assert_eq!(quiz.success_rate(), 67);
        assert_eq!(quiz.completion_percent(), 50);
        assert!(!quiz.is_complete());

        for (i, q) in QUESTIONS.iter().enumerate().skip(3) {
            quiz.answer(i, q.correct, &mut tally);
        }
        assert!(quiz.is_complete());
        assert_eq!(tally.points, 250);
        assert_eq!(tally.discoveries, 5);
    }
}
