use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{EngagementRepository, EngagementSample, EngagementStoreError};

const DAY_WINDOW: i64 = 1;
const WEEK_WINDOW: i64 = 7;
const MONTH_WINDOW: i64 = 30;

/// Aggregated view served to the staff console.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementStats {
    pub average_time_on_page: WindowedAverages,
    /// Raw coordinate entries pulled from stored `cursor_positions` arrays,
    /// newest samples first, capped by the configured limit.
    pub heatmap_coordinates: Vec<serde_json::Value>,
}

/// Trailing-window averages, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowedAverages {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

/// Compute engagement statistics as of `now`.
///
/// Malformed or non-array `cursor_positions` entries are skipped rather than
/// failing the whole aggregation.
pub fn engagement_stats<R>(
    repository: &R,
    now: DateTime<Utc>,
    heatmap_limit: usize,
) -> Result<EngagementStats, EngagementStoreError>
where
    R: EngagementRepository,
{
    let samples = repository.samples_since(now - Duration::days(MONTH_WINDOW))?;

    let day_cutoff = now - Duration::days(DAY_WINDOW);
    let week_cutoff = now - Duration::days(WEEK_WINDOW);

    let average_time_on_page = WindowedAverages {
        day: windowed_average(&samples, day_cutoff),
        week: windowed_average(&samples, week_cutoff),
        month: average(samples.iter()),
    };

    let mut heatmap_coordinates = Vec::new();
    for sample in &samples {
        match serde_json::from_str::<serde_json::Value>(&sample.cursor_positions) {
            Ok(serde_json::Value::Array(points)) => heatmap_coordinates.extend(points),
            _ => continue,
        }
        if heatmap_coordinates.len() >= heatmap_limit {
            break;
        }
    }
    heatmap_coordinates.truncate(heatmap_limit);

    Ok(EngagementStats {
        average_time_on_page,
        heatmap_coordinates,
    })
}

fn windowed_average(samples: &[EngagementSample], cutoff: DateTime<Utc>) -> f64 {
    average(samples.iter().filter(|sample| sample.created_at >= cutoff))
}

fn average<'a, I>(samples: I) -> f64
where
    I: Iterator<Item = &'a EngagementSample>,
{
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for sample in samples {
        total += u64::from(sample.time_on_page);
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    round_two((total as f64) / (count as f64))
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
