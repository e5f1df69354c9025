//! Random quote selection.

use crate::error::{Error, Result};
use crate::lexicon::{EmotionLabel, Lexicon};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shown when no quote pool exists for a label; keeps the interactive loop
/// alive instead of terminating on a lookup failure.
pub const FALLBACK_QUOTE: &str = "Sorry, I don't have quotes for that emotion yet.";

/// Picks one quote uniformly at random from the label's pool.
pub fn pick_quote<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    label: EmotionLabel,
    rng: &mut R,
) -> Result<&'static str> {
    lexicon
        .quotes(label)
        .and_then(|quotes| quotes.choose(rng).copied())
        .ok_or(Error::NoQuotes(label))
}
