//! Keyword-based emotion detection.

use crate::lexicon::{EmotionLabel, Lexicon};

/// Maps free text to an emotion label.
///
/// The lowered input is scanned against the lexicon entries in priority
/// order; the first label with any keyword contained as a substring wins and
/// evaluation stops there. Text matching nothing (including the empty
/// string) resolves to `Neutral`.
pub fn classify(lexicon: &Lexicon, text: &str) -> EmotionLabel {
    let text = text.to_lowercase();
    for entry in lexicon.entries() {
        if entry.keywords.iter().any(|keyword| text.contains(keyword)) {
            return entry.label;
        }
    }
    EmotionLabel::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_builtin(text: &str) -> EmotionLabel {
        classify(&Lexicon::builtin(), text)
    }

    #[test]
    fn single_keyword_hits_its_label() {
        assert_eq!(classify_builtin("what a great day"), EmotionLabel::Happy);
        assert_eq!(classify_builtin("I feel upset today"), EmotionLabel::Sad);
        assert_eq!(classify_builtin("so furious right now"), EmotionLabel::Angry);
        assert_eq!(classify_builtin("I have a crush"), EmotionLabel::Love);
        assert_eq!(
            classify_builtin("chasing my dream job"),
            EmotionLabel::Motivation
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_builtin("FEELING AWESOME"), EmotionLabel::Happy);
        assert_eq!(classify_builtin("So Annoyed"), EmotionLabel::Angry);
    }

    #[test]
    fn earlier_priority_label_wins_on_ambiguous_text() {
        // happy before sad
        assert_eq!(
            classify_builtin("happy but also sad"),
            EmotionLabel::Happy
        );
        // sad before angry, regardless of word order in the text
        assert_eq!(
            classify_builtin("angry and a bit depressed"),
            EmotionLabel::Sad
        );
        // love before motivation
        assert_eq!(
            classify_builtin("I love my work"),
            EmotionLabel::Love
        );
    }

    #[test]
    fn unmatched_text_falls_to_neutral() {
        assert_eq!(classify_builtin("the sky is blue"), EmotionLabel::Neutral);
        assert_eq!(classify_builtin(""), EmotionLabel::Neutral);
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "unhappy" contains "happy", which sits earlier in priority order
        assert_eq!(classify_builtin("so unhappy"), EmotionLabel::Happy);
    }
}
