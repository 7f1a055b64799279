use std::collections::BTreeMap;

use log::debug;

use crate::types::{KmBucket, RawRecord};

#[derive(Debug, Default)]
struct BucketAccum {
    speed_sum: f64,
    speed_count: usize,
    power_sum: f64,
    power_count: usize,
}

/// Bøtter records per påbegynt kilometer (kumulativ distanse) og
/// beregner snitt-pace og snitt-watt per bøtte. Feiler aldri:
/// ubrukelige samples gir færre bøtter, ikke en feil.
///
/// Pace inverteres fra snittfarten i bøtta (ikke snitt av per-sample
/// pace) – det unngår deling-på-nær-null fra stillestående samples.
pub fn aggregate_by_kilometer(records: &[RawRecord]) -> Vec<KmBucket> {
    let mut buckets: BTreeMap<u32, BucketAccum> = BTreeMap::new();

    for record in records {
        // Uten kumulativ distanse kan samplet ikke plasseres i noen bøtte.
        let distance = match record.distance {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => continue,
        };

        // 1-basert: meter 0–999 havner i kilometer 1.
        let km = (distance / 1000.0).floor() as u32 + 1;
        let acc = buckets.entry(km).or_default();

        // Fart <= 0 er et stillestående/ugyldig sample og holdes utenfor
        // pace-snittet.
        if let Some(v) = record.speed {
            if v.is_finite() && v > 0.0 {
                acc.speed_sum += v;
                acc.speed_count += 1;
            }
        }

        // Watt tas med uten positivitetsfilter (null/negativt teller).
        if let Some(w) = record.power {
            if w.is_finite() {
                acc.power_sum += w;
                acc.power_count += 1;
            }
        }
    }

    let out: Vec<KmBucket> = buckets
        .into_iter()
        .map(|(kilometer, acc)| {
            let avg_speed = if acc.speed_count > 0 {
                acc.speed_sum / acc.speed_count as f64
            } else {
                0.0
            };
            KmBucket {
                kilometer,
                avg_pace_seconds: if avg_speed > 0.0 { 1000.0 / avg_speed } else { 0.0 },
                avg_power_watts: if acc.power_count > 0 {
                    (acc.power_sum / acc.power_count as f64).round() as i32
                } else {
                    0
                },
            }
        })
        .collect();

    debug!("bucketed {} records into {} kilometers", records.len(), out.len());
    out
}
