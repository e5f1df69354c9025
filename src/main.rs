use chrono::Local;
use clap::Parser;
use emotion_quote_companion::classify::classify;
use emotion_quote_companion::lexicon::Lexicon;
use emotion_quote_companion::quotes::{pick_quote, FALLBACK_QUOTE};
use emotion_quote_companion::report::{build_report, ReportOutcome};
use emotion_quote_companion::store::{EmotionRecord, EventLogStore, DEFAULT_LOG_PATH};
use std::io::Write;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Args {
    Run,
}

fn prompt(text: &str) -> std::io::Result<String> {
    print!("{text}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

fn exec_run() -> anyhow::Result<()> {
    let user_name = whoami::username();
    let lexicon = Lexicon::builtin();
    let store = EventLogStore::new(DEFAULT_LOG_PATH);
    let mut rng = rand::thread_rng();

    println!("Emotion-Based Quote Recommendation System");
    println!("-----------------------------------------");

    loop {
        println!();
        println!("Menu:");
        println!("  1. Get a quote based on your mood");
        println!("  2. View weekly emotion report");
        println!("  3. Exit");

        let choice = prompt(&format!("{user_name}, enter your choice (1-3): "))?;
        match choice.as_str() {
            "1" => {
                let input = prompt("\nHow are you feeling today?\n> ")?;
                let emotion = classify(&lexicon, &input);
                let quote = match pick_quote(&lexicon, emotion, &mut rng) {
                    Ok(quote) => quote,
                    Err(err) => {
                        warn!(%emotion, "quote lookup failed: {err}");
                        FALLBACK_QUOTE
                    }
                };

                println!();
                println!("Detected emotion: {}", emotion.capitalized());
                println!("Recommended quote: \"{quote}\"");

                let record = EmotionRecord {
                    emotion,
                    timestamp: Local::now().naive_local(),
                };
                if let Err(err) = store.append(record) {
                    eprintln!("Could not update {}: {err}", store.path().display());
                }
            }
            "2" => {
                let now = Local::now().naive_local();
                match build_report(&store, &lexicon, now, &mut rng, Path::new(".")) {
                    Ok(ReportOutcome::NoData) => println!("No emotion data available yet."),
                    Ok(ReportOutcome::NoDataInWindow) => {
                        println!("No emotions recorded in the last 7 days.")
                    }
                    Ok(ReportOutcome::Ready(report)) => {
                        let top: Vec<&str> = report
                            .top_emotions
                            .iter()
                            .map(|label| label.capitalized())
                            .collect();
                        println!();
                        println!("Weekly Emotion Tracker Report (Last 7 Days)");
                        println!("-------------------------------------------");
                        println!("Most frequent emotion(s): {}", top.join(", "));
                        println!("Frequency: {} time(s)", report.highest_count);
                        println!("Combined quote: \"{}\"", report.combined_quote);
                        println!("Bar chart saved as: {}", report.chart_path.display());
                    }
                    Err(err) => eprintln!("Could not build report: {err}"),
                }
            }
            "3" => {
                println!("Thank you for using the Emotion-Based Quote Recommendation System!");
                break;
            }
            other => println!("Invalid choice {other:?}, please enter 1, 2 or 3."),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Args::parse() {
        Args::Run => exec_run(),
    }
}
