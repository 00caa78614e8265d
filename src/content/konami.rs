//! Konami code easter egg

use std::collections::VecDeque;

use crate::progress::ProgressSink;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

/// Points awarded for entering the code
pub const KONAMI_POINTS: u64 = 100;

pub const ACTIVATED_MESSAGE: &str = "✨ KONAMI CODE ACTIVÉ ! Secret débloqué.";

pub const EASTER_EGG_MESSAGE: &str =
    "Vous avez découvert un secret! Les femmes représentent 46% des joueurs dans le monde!";

/// Watches the last ten keys for the code
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<String>,
}

impl KonamiDetector {
    /// Feed a `KeyboardEvent.key`; true when the code was just completed
    pub fn push(&mut self, key: &str) -> bool {
        self.buffer.push_back(key.to_lowercase());
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }

        let matched = self.buffer.len() == KONAMI_SEQUENCE.len()
            && self
                .buffer
                .iter()
                .zip(KONAMI_SEQUENCE)
                .all(|(got, want)| *got == want.to_lowercase());
        if matched {
            self.buffer.clear();
        }
        matched
    }

    /// Like [`push`](Self::push), awarding the bonus on completion
    pub fn push_and_reward(&mut self, key: &str, progress: &mut dyn ProgressSink) -> bool {
        let matched = self.push(key);
        if matched {
            log::info!("Konami code activated");
            progress.on_score_update(KONAMI_POINTS);
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_detected_once() {
        let mut detector = KonamiDetector::default();
        let hits: Vec<bool> = KONAMI_SEQUENCE.iter().map(|k| detector.push(k)).collect();
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
        // Buffer was cleared
        assert!(!detector.push("a"));
    }

    #[test]
    fn test_noise_before_code_and_case() {
        let mut detector = KonamiDetector::default();
        for k in ["x", "ArrowUp", "Enter"] {
            assert!(!detector.push(k));
        }
        let mut last = false;
        for k in KONAMI_SEQUENCE {
            let k = if k == "b" { "B" } else { k };
            last = detector.push(k);
        }
        assert!(last);
    }

    #[test]
    fn test_wrong_order() {
        let mut detector = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE;
        keys.swap(8, 9);
        assert!(!keys.iter().any(|k| detector.push(k)));
    }
}
