//! Sensory vocabulary counts across the five senses.

use serde::Serialize;

use super::lexicon::{in_sense, is_emotion_word, Sense};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SensoryProfile {
    pub visual: usize,
    pub auditory: usize,
    pub tactile: usize,
    pub olfactory: usize,
    pub gustatory: usize,
    pub emotion_word_hits: usize,
}

impl SensoryProfile {
    pub fn get(&self, sense: Sense) -> usize {
        match sense {
            Sense::Visual => self.visual,
            Sense::Auditory => self.auditory,
            Sense::Tactile => self.tactile,
            Sense::Olfactory => self.olfactory,
            Sense::Gustatory => self.gustatory,
        }
    }

    fn bump(&mut self, sense: Sense) {
        match sense {
            Sense::Visual => self.visual += 1,
            Sense::Auditory => self.auditory += 1,
            Sense::Tactile => self.tactile += 1,
            Sense::Olfactory => self.olfactory += 1,
            Sense::Gustatory => self.gustatory += 1,
        }
    }

    pub fn total(&self) -> usize {
        Sense::ALL.iter().map(|&s| self.get(s)).sum()
    }
}

#[tracing::instrument(skip_all)]
pub fn analyze_sensory_words<S: AsRef<str>>(tokens: &[S]) -> SensoryProfile {
    let mut profile = SensoryProfile::default();
    for token in tokens {
        let token = token.as_ref();
        for sense in Sense::ALL {
            if in_sense(sense, token) {
                profile.bump(sense);
            }
        }
        if is_emotion_word(token) {
            profile.emotion_word_hits += 1;
        }
    }
    profile
}
