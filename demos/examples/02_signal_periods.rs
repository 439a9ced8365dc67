use tramo::{FillMode, Tramo};
use tramo_demos::common::{FEVER_CELSIUS, temperature_readings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tramo = Tramo::builder()
        .fill_mode(FillMode::TrueBetweenThreshold { threshold: 4 })
        .cooloff(2)
        .build()?;

    let mut signals = tramo.signals();
    for (patient, readings) in temperature_readings() {
        let samples = readings
            .into_iter()
            .map(|(at, celsius)| (at, celsius >= FEVER_CELSIUS))
            .collect();
        signals = signals.samples(patient, samples);
    }
    let report = signals.run().await?;

    for entry in &report.entries {
        let record: serde_json::Map<String, serde_json::Value> =
            entry.periods.to_record("fever_", true).into_iter().collect();
        println!("{} (from {}): {}", entry.entity, entry.origin, serde_json::Value::Object(record));
        for (start, end) in entry.periods.spans() {
            if let (Some(from), Some(to)) = (entry.date_of(start), entry.date_of(end)) {
                println!("  fever {from} .. {to}");
            }
        }
    }
    for w in &report.warnings {
        println!("warning: {w}");
    }

    Ok(())
}
