use crate::controller::score::score_aggregators::mean;
use crate::model::{
    BoxPlotStats, CumulativeScores, FREQUENCY_LABELS, Quartiles, SEGMENT_LEN, ScoreFrequency,
    SegmentAverages,
};

const WHISKER_IQR: f64 = 1.5;

/// Count of holes per score bucket `1..=6`, with everything above 6 in the
/// last bucket. Scores below 1 are not counted.
#[must_use]
pub fn score_frequency(player_name: &str, scores: &[i32]) -> ScoreFrequency {
    let mut counts = [0usize; FREQUENCY_LABELS.len()];
    let overflow = FREQUENCY_LABELS.len() - 1;

    for &score in scores {
        let Ok(bucket) = usize::try_from(score) else {
            continue;
        };
        if bucket == 0 {
            continue;
        }
        counts[(bucket - 1).min(overflow)] += 1;
    }

    ScoreFrequency {
        player_name: player_name.to_string(),
        counts,
    }
}

#[must_use]
pub fn cumulative_scores(player_name: &str, scores: &[i32]) -> CumulativeScores {
    let running_totals = scores
        .iter()
        .scan(0i64, |total, &score| {
            *total += i64::from(score);
            Some(*total)
        })
        .collect();

    CumulativeScores {
        player_name: player_name.to_string(),
        running_totals,
    }
}

/// Averages for holes 1-6, 7-12 and 13-18. A segment the player never
/// reached is `None`.
#[must_use]
pub fn segment_averages(player_name: &str, scores: &[i32]) -> SegmentAverages {
    let mut segments = [None; 3];
    for (idx, segment) in segments.iter_mut().enumerate() {
        let start = (idx * SEGMENT_LEN).min(scores.len());
        let end = ((idx + 1) * SEGMENT_LEN).min(scores.len());
        *segment = mean(&scores[start..end]);
    }

    SegmentAverages {
        player_name: player_name.to_string(),
        segments,
    }
}

fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    let position = fraction * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Five-number summary with linear interpolation between ranks.
#[must_use]
pub fn quartiles(scores: &[i32]) -> Option<Quartiles> {
    if scores.is_empty() {
        return None;
    }
    let mut sorted: Vec<f64> = scores.iter().map(|&s| f64::from(s)).collect();
    sorted.sort_by(f64::total_cmp);

    Some(Quartiles {
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

#[must_use]
pub fn box_plot_stats(player_name: &str, scores: &[i32]) -> Option<BoxPlotStats> {
    let quartiles = quartiles(scores)?;
    let reach = WHISKER_IQR * (quartiles.q3 - quartiles.q1);
    let low_fence = quartiles.q1 - reach;
    let high_fence = quartiles.q3 + reach;

    let values = scores.iter().map(|&s| f64::from(s));
    let inside: Vec<f64> = values
        .clone()
        .filter(|v| (low_fence..=high_fence).contains(v))
        .collect();
    let outliers: Vec<f64> = values
        .filter(|v| !(low_fence..=high_fence).contains(v))
        .collect();

    Some(BoxPlotStats {
        player_name: player_name.to_string(),
        quartiles,
        whisker_low: inside.iter().copied().fold(quartiles.q1, f64::min),
        whisker_high: inside.iter().copied().fold(quartiles.q3, f64::max),
        outliers,
    })
}
