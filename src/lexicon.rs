use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of mood categories the companion recognizes.
///
/// `Neutral` is the universal fallback: it carries no trigger keywords and
/// every input that matches nothing else resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Love,
    Motivation,
    Neutral,
}

impl EmotionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Love => "love",
            EmotionLabel::Motivation => "motivation",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Capitalized form for user-facing report lines.
    pub fn capitalized(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Love => "Love",
            EmotionLabel::Motivation => "Motivation",
            EmotionLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emotion category: its trigger keywords (all lowercase) and the pool of
/// quotes recommended for it.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub label: EmotionLabel,
    pub keywords: &'static [&'static str],
    pub quotes: &'static [&'static str],
}

/// Immutable mapping from emotion label to keywords and quotes, built once at
/// startup and passed by reference. Entry order is the classification
/// priority order: happy, sad, angry, love, motivation, neutral.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                LexiconEntry {
                    label: EmotionLabel::Happy,
                    keywords: &[
                        "happy", "joy", "calm", "excited", "great", "good", "awesome", "fun",
                        "enjoy",
                    ],
                    quotes: &[
                        "Smile, it confuses people.",
                        "Happiness is a choice, not a result.",
                        "Keep smiling, because life is a beautiful thing.",
                        "Be happy for this moment. This moment is your life.",
                    ],
                },
                LexiconEntry {
                    label: EmotionLabel::Sad,
                    keywords: &["sad", "unhappy", "depressed", "cry", "bad", "upset", "hurt"],
                    quotes: &[
                        "Every storm runs out of rain.",
                        "It's okay to not be okay.",
                        "Tough times never last, but tough people do.",
                        "Sadness is but a wall between two gardens.",
                    ],
                },
                LexiconEntry {
                    label: EmotionLabel::Angry,
                    keywords: &["angry", "mad", "furious", "irritated", "annoyed"],
                    quotes: &[
                        "For every minute you are angry, you lose 60 seconds of happiness.",
                        "Stay calm; anger is your enemy.",
                        "Anger doesn't solve anything, it builds nothing, but it can destroy everything.",
                    ],
                },
                LexiconEntry {
                    label: EmotionLabel::Love,
                    keywords: &["love", "crush", "affection", "romantic"],
                    quotes: &[
                        "To love and be loved is everything.",
                        "Where there is love, there is life.",
                        "Love all, trust a few, do wrong to none.",
                    ],
                },
                LexiconEntry {
                    label: EmotionLabel::Motivation,
                    keywords: &[
                        "motivated",
                        "strong",
                        "motivation",
                        "success",
                        "goal",
                        "dream",
                        "energetic",
                        "work",
                        "inspire",
                    ],
                    quotes: &[
                        "Push yourself, because no one else is going to do it for you.",
                        "Don't watch the clock; do what it does, keep going.",
                        "Believe you can and you're halfway there.",
                        "The harder you work for something, the greater you'll feel when you achieve it.",
                        "Success doesn't just find you. You have to go out and get it.",
                    ],
                },
                LexiconEntry {
                    label: EmotionLabel::Neutral,
                    keywords: &[],
                    quotes: &[
                        "Be yourself; everyone else is already taken.",
                        "Keep learning, keep growing.",
                        "Believe in yourself and you will be unstoppable.",
                    ],
                },
            ],
        }
    }

    /// Entries in classification priority order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn entry(&self, label: EmotionLabel) -> Option<&LexiconEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn quotes(&self, label: EmotionLabel) -> Option<&'static [&'static str]> {
        self.entry(label).map(|entry| entry.quotes)
    }
}
