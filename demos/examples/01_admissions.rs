use std::time::Duration;

use tramo::Tramo;
use tramo_demos::common::ward_episodes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let episodes = ward_episodes();

    for (label, tramo) in [
        ("touching only", Tramo::builder().build()?),
        (
            "gaps up to a day",
            Tramo::builder().join_gap(Duration::from_secs(86_400)).build()?,
        ),
    ] {
        let report = tramo.admissions().episodes(episodes.clone()).run().await?;
        println!("--- {label}: {} admissions ---", report.admissions.len());
        for adm in &report.admissions {
            println!(
                "#{:<2} {:<10} {} -> {}  episodes={} ids={:?} indices={:?}",
                adm.admission_id,
                adm.entity,
                adm.start.format("%Y-%m-%d %H:%M"),
                adm.end.format("%Y-%m-%d %H:%M"),
                adm.num_episodes,
                adm.all_episode_ids,
                adm.all_episode_indices,
            );
        }
        println!("stats: {:?}", report.stats.to_map());
        for w in &report.warnings {
            println!("warning: {w}");
        }
    }

    Ok(())
}
