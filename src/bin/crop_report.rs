// Crop Report
//
// Purpose: Print a markdown crop suitability report for a district or PIN code
// Usage: cargo run --bin crop_report -- <district|pincode> [month] [en|kn]
//
// Examples:
//   crop_report Mandya
//   crop_report 571401 7
//   crop_report "Dakshina Kannada" 11 kn

use anyhow::{bail, Context};
use chrono::Datelike;
use crop_advisor::season::validate_month;
use crop_advisor::{analyze, render_markdown, resolve, AnalysisRequest, CropDatabase, Language};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report can be redirected
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(place) = args.first() else {
        bail!("usage: crop_report <district|pincode> [month] [en|kn]");
    };

    let month = match args.get(1) {
        Some(m) => {
            let m: u32 = m.parse().with_context(|| format!("month must be a number, got '{}'", m))?;
            validate_month(m)?
        }
        None => chrono::Local::now().month(),
    };

    let language = match args.get(2) {
        Some(code) => Language::from_code(code)
            .with_context(|| format!("unsupported language '{}', use en or kn", code))?,
        None => Language::En,
    };

    let location = resolve(place).with_context(|| format!("could not resolve '{}'", place))?;
    tracing::info!("Analysing {} for month {}", location.name, month);

    let request = AnalysisRequest::for_location(&location, month, language);
    let analysis = analyze(CropDatabase::builtin(), &request);

    print!("{}", render_markdown(&analysis, language));
    Ok(())
}
