//! SVG bar chart of the weekly emotion frequencies.

use crate::error::{Error, Result};
use crate::lexicon::EmotionLabel;
use chrono::NaiveDateTime;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

// Positional bar colors, cycled by bar index as in the original palette.
const BAR_COLORS: [RGBColor; 6] = [
    RGBColor(255, 204, 0),
    RGBColor(255, 102, 102),
    RGBColor(102, 204, 255),
    RGBColor(153, 255, 153),
    RGBColor(255, 153, 255),
    RGBColor(204, 204, 204),
];

/// Renders one bar per counted label (in the given order) into `dir`, under
/// a filename embedding `now` so prior charts are never overwritten.
/// Returns the path of the written artifact.
pub fn render_weekly_chart(
    counts: &[(EmotionLabel, usize)],
    now: NaiveDateTime,
    dir: &Path,
) -> Result<PathBuf> {
    let filename = format!("weekly_emotion_chart_{}.svg", now.format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);

    let max = counts.iter().map(|&(_, count)| count).max().unwrap_or(0) as u32;

    // Scoped so the backend's borrow of `path` ends before the path is
    // returned.
    {
        let root = SVGBackend::new(&path, (800, 500)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::Chart(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Weekly Emotion Frequency", ("sans-serif", 28))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(44)
            .build_cartesian_2d((0..counts.len()).into_segmented(), 0u32..max + 1)
            .map_err(|e| Error::Chart(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Emotions")
            .y_desc("Frequency")
            .x_labels(counts.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => counts
                    .get(*i)
                    .map(|&(label, _)| label.to_string())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(|e| Error::Chart(e.to_string()))?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, &(_, count))| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0),
                        (SegmentValue::Exact(i + 1), count as u32),
                    ],
                    BAR_COLORS[i % BAR_COLORS.len()].filled(),
                );
                bar.set_margin(0, 0, 10, 10);
                bar
            }))
            .map_err(|e| Error::Chart(e.to_string()))?;

        root.present().map_err(|e| Error::Chart(e.to_string()))?;
    }

    debug!(path = %path.display(), bars = counts.len(), "weekly chart written");
    Ok(path)
}
