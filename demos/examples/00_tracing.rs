use tramo::Tramo;
use tramo_demos::common::{FEVER_CELSIUS, temperature_readings, ward_episodes};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug,tramo=trace,tramo_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let tramo = Tramo::builder().initial_margin(1).cooloff(2).build()?;

    // Fever periods
    let mut signals = tramo.signals();
    for (patient, readings) in temperature_readings() {
        let samples = readings
            .into_iter()
            .map(|(at, celsius)| (at, celsius >= FEVER_CELSIUS))
            .collect();
        signals = signals.samples(patient, samples);
    }
    let report = signals.run().await?;
    tracing::info!(entries = report.entries.len(), warnings = report.warnings.len(), "fever periods detected");

    // Admissions
    let report = tramo.admissions().episodes(ward_episodes()).run().await?;
    tracing::info!(admissions = report.admissions.len(), stats = ?report.stats.to_map(), "admissions merged");

    Ok(())
}
