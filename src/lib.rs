//! Emotion-based quote recommendation with a persisted weekly emotion log.
//!
//! Free text is classified into a coarse emotion via keyword matching
//! ([`classify::classify`]), answered with a random quote for that emotion
//! ([`quotes::pick_quote`]), and recorded in a whole-file JSON log
//! ([`store::EventLogStore`]). [`report::build_report`] aggregates the log
//! over a trailing 7-day window and renders a frequency bar chart.

pub mod chart;
pub mod classify;
pub mod error;
pub mod lexicon;
pub mod quotes;
pub mod report;
pub mod store;

pub use error::{Error, Result};
