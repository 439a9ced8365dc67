use chrono::NaiveDate;
use tramo_core::{
    FillMode, KeyedInterval, compute_periods_filled, delete_period, find_interval_by_date_strict,
    group_by_week, join_periods_by_distance, join_specific_periods,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ordinals = [0, 1, 2, 7, 9, 13, 15, 16];
    let values = [false, true, false, false, true, true, false, true];
    let set = compute_periods_filled(&ordinals, &values, FillMode::TrueBetween)?;
    println!("detected:  {:?}", set.summary());
    println!("  starts={:?} ends={:?} gaps={:?}", set.starts, set.ends, set.gap_before);

    let joined = join_specific_periods(&set, 0)?;
    println!("join 0+1:  durations={:?} gaps={:?}", joined.durations, joined.gap_before);

    let deleted = delete_period(&set, 1)?;
    println!("delete 1:  {:?} gaps={:?}", deleted.summary(), deleted.gap_before);

    // Only the positive days of the joined period come off the totals.
    let trimmed = delete_period(&joined, 0)?;
    println!("join, then delete 0:  {:?}", trimmed.summary());

    let close = join_periods_by_distance(&set, 2)?;
    println!("within 2:  periods={} ends={:?}", close.periods, close.ends);

    match join_specific_periods(&set, 2) {
        Ok(_) => println!("unexpected join"),
        Err(e) => println!("join 2+3:  {e}"),
    }

    let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).ok_or("bad date");
    let rows = vec![
        KeyedInterval::new("patient-1", d(1)?, d(4)?),
        KeyedInterval::new("patient-1", d(8)?, d(9)?),
        KeyedInterval::new("patient-2", d(2)?, d(6)?),
    ];
    let hit = find_interval_by_date_strict(&rows, Some(&"patient-1"), &d(3)?)?;
    println!("patient-1 on {}: {} .. {}", d(3)?, hit.start, hit.end);

    let visits = [d(1)?, d(3)?, d(12)?, d(14)?, d(25)?];
    for group in group_by_week(visits) {
        println!("visit week: {group:?}");
    }

    Ok(())
}
