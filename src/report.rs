//! Weekly aggregation over the emotion log.

use crate::chart::render_weekly_chart;
use crate::error::Result;
use crate::lexicon::{EmotionLabel, Lexicon};
use crate::quotes::pick_quote;
use crate::store::EventLogStore;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Summary of the trailing 7-day window. Derived on demand, never persisted.
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub window_start: NaiveDateTime,
    /// Per-label counts in the order each label was first encountered.
    pub counts: Vec<(EmotionLabel, usize)>,
    pub highest_count: usize,
    /// Every label tied at `highest_count`, in counting order.
    pub top_emotions: Vec<EmotionLabel>,
    /// One random quote per top emotion, joined by a single space.
    pub combined_quote: String,
    pub chart_path: PathBuf,
}

/// Outcome of a report request. The two no-data cases are terminal states,
/// not errors, and neither writes a chart.
#[derive(Debug)]
pub enum ReportOutcome {
    /// The store holds no records at all.
    NoData,
    /// Records exist but none fall inside the trailing 7-day window.
    NoDataInWindow,
    Ready(WeeklyReport),
}

/// Builds the weekly report: filters the log to the last 7 days before
/// `now`, counts per label, resolves ties, combines quotes, and renders the
/// frequency chart into `chart_dir`. Read-only with respect to the store.
pub fn build_report<R: Rng + ?Sized>(
    store: &EventLogStore,
    lexicon: &Lexicon,
    now: NaiveDateTime,
    rng: &mut R,
    chart_dir: &Path,
) -> Result<ReportOutcome> {
    let records = store.load_all()?;
    if records.is_empty() {
        return Ok(ReportOutcome::NoData);
    }

    let window_start = now - Duration::days(7);
    let weekly: Vec<EmotionLabel> = records
        .iter()
        .filter(|record| record.timestamp >= window_start)
        .map(|record| record.emotion)
        .collect();
    if weekly.is_empty() {
        return Ok(ReportOutcome::NoDataInWindow);
    }

    // Insertion-ordered counting; ties keep first-seen order on purpose.
    let mut counts: Vec<(EmotionLabel, usize)> = Vec::new();
    for emotion in weekly {
        match counts.iter_mut().find(|(label, _)| *label == emotion) {
            Some((_, count)) => *count += 1,
            None => counts.push((emotion, 1)),
        }
    }

    let highest_count = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let top_emotions: Vec<EmotionLabel> = counts
        .iter()
        .filter(|&&(_, count)| count == highest_count)
        .map(|&(label, _)| label)
        .collect();

    let mut parts = Vec::with_capacity(top_emotions.len());
    for &label in &top_emotions {
        parts.push(pick_quote(lexicon, label, rng)?);
    }
    let combined_quote = parts.join(" ");

    let chart_path = render_weekly_chart(&counts, now, chart_dir)?;

    Ok(ReportOutcome::Ready(WeeklyReport {
        window_start,
        counts,
        highest_count,
        top_emotions,
        combined_quote,
        chart_path,
    }))
}
