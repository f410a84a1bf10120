use crate::error::GolfError;
use crate::model::{
    AceRecord, ConsistencyExtremes, HoleAverage, HoleDifficulty, PlayerConsistency, PlayerSummary,
    ScoreTable, TREND_SPLIT, Trend, TrendRecord,
};

/// Fewest scores a standard deviation can be taken over.
pub const MIN_SCORES_FOR_SPREAD: usize = 2;
/// Fewest holes that leave both the front and the back nine non-empty.
pub const MIN_HOLES_FOR_TREND: usize = TREND_SPLIT + 1;

#[must_use]
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    Some(sum / values.len() as f64)
}

/// Sum of the scores, or an error when it does not fit in an `i32`.
///
/// # Errors
///
/// Will return `Err` if the total overflows.
pub fn checked_total(player_name: &str, scores: &[i32]) -> Result<i32, GolfError> {
    scores
        .iter()
        .try_fold(0i32, |total, &score| total.checked_add(score))
        .ok_or_else(|| GolfError::ScoreOverflow {
            player: player_name.to_string(),
        })
}

/// Sample standard deviation (n - 1 denominator).
#[must_use]
pub fn sample_std_dev(values: &[i32]) -> Option<f64> {
    if values.len() < MIN_SCORES_FOR_SPREAD {
        return None;
    }
    let avg = mean(values)?;
    let squares: f64 = values
        .iter()
        .map(|&v| (f64::from(v) - avg).powi(2))
        .sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// # Errors
///
/// Will return `Err` if the player has fewer than two scores or the total
/// overflows.
pub fn player_summary(player_name: &str, scores: &[i32]) -> Result<PlayerSummary, GolfError> {
    let insufficient = || GolfError::InsufficientScores {
        player: player_name.to_string(),
        count: scores.len(),
        required: MIN_SCORES_FOR_SPREAD,
    };

    let total = checked_total(player_name, scores)?;
    let consistency = sample_std_dev(scores).ok_or_else(insufficient)?;
    let average = mean(scores).ok_or_else(insufficient)?;
    let best = scores.iter().copied().min().ok_or_else(insufficient)?;
    let worst = scores.iter().copied().max().ok_or_else(insufficient)?;

    Ok(PlayerSummary {
        player_name: player_name.to_string(),
        total,
        average,
        best,
        worst,
        consistency,
    })
}

/// # Errors
///
/// Will return `Err` if any player has fewer than two scores.
pub fn player_summaries(table: &ScoreTable) -> Result<Vec<PlayerSummary>, GolfError> {
    table
        .iter()
        .map(|player| player_summary(&player.player_name, &player.scores))
        .collect()
}

/// Average score per hole over the holes every player has played.
#[must_use]
pub fn hole_averages(table: &ScoreTable) -> Vec<f64> {
    let shared = table.shared_holes();
    (0..shared)
        .filter_map(|hole| {
            let hole_scores: Vec<i32> = table.iter().map(|p| p.scores[hole]).collect();
            mean(&hole_scores)
        })
        .collect()
}

/// Hardest and easiest hole; on a tie the lower hole number wins.
#[must_use]
pub fn hole_difficulty(table: &ScoreTable) -> Option<HoleDifficulty> {
    let averages = hole_averages(table);
    let first = *averages.first()?;

    let mut hardest = HoleAverage {
        hole: 1,
        average: first,
    };
    let mut easiest = hardest;
    for (idx, &average) in averages.iter().enumerate().skip(1) {
        if average > hardest.average {
            hardest = HoleAverage {
                hole: idx + 1,
                average,
            };
        }
        if average < easiest.average {
            easiest = HoleAverage {
                hole: idx + 1,
                average,
            };
        }
    }

    Some(HoleDifficulty {
        averages,
        hardest,
        easiest,
    })
}

/// Lowest and highest standard deviation; ties go to the player listed first.
#[must_use]
pub fn consistency_extremes(summaries: &[PlayerSummary]) -> Option<ConsistencyExtremes> {
    let first = summaries.first()?;
    let mut most = first;
    let mut least = first;
    for summary in &summaries[1..] {
        if summary.consistency < most.consistency {
            most = summary;
        }
        if summary.consistency > least.consistency {
            least = summary;
        }
    }

    let to_record = |s: &PlayerSummary| PlayerConsistency {
        player_name: s.player_name.clone(),
        consistency: s.consistency,
    };
    Some(ConsistencyExtremes {
        most_consistent: to_record(most),
        least_consistent: to_record(least),
    })
}

/// Hole numbers of every hole-in-one, for players that made at least one.
#[must_use]
pub fn find_aces(table: &ScoreTable) -> Vec<AceRecord> {
    table
        .iter()
        .filter_map(|player| {
            let holes: Vec<usize> = player
                .scores
                .iter()
                .enumerate()
                .filter(|&(_, &score)| score == 1)
                .map(|(idx, _)| idx + 1)
                .collect();
            if holes.is_empty() {
                None
            } else {
                Some(AceRecord {
                    player_name: player.player_name.clone(),
                    holes,
                })
            }
        })
        .collect()
}

/// Mean of every prefix: entry `i` is the average over holes `1..=i + 1`.
#[must_use]
pub fn running_averages(scores: &[i32]) -> Vec<f64> {
    let mut sum = 0.0;
    scores
        .iter()
        .enumerate()
        .map(|(idx, &score)| {
            sum += f64::from(score);
            sum / (idx + 1) as f64
        })
        .collect()
}

#[must_use]
pub fn classify_trend(front_nine_average: f64, back_nine_average: f64) -> Trend {
    if back_nine_average < front_nine_average {
        Trend::Improving
    } else if back_nine_average > front_nine_average {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// # Errors
///
/// Will return `Err` if the player does not have at least one hole after the
/// front nine.
pub fn performance_trend(player_name: &str, scores: &[i32]) -> Result<TrendRecord, GolfError> {
    if scores.len() < MIN_HOLES_FOR_TREND {
        return Err(GolfError::InsufficientHoles {
            player: player_name.to_string(),
            count: scores.len(),
            required: MIN_HOLES_FOR_TREND,
        });
    }

    let (front, back) = scores.split_at(TREND_SPLIT);
    let front_nine_average = mean(front).unwrap_or_default();
    let back_nine_average = mean(back).unwrap_or_default();

    Ok(TrendRecord {
        player_name: player_name.to_string(),
        front_nine_average,
        back_nine_average,
        trend: classify_trend(front_nine_average, back_nine_average),
        running_averages: running_averages(scores),
    })
}

/// # Errors
///
/// Will return `Err` if any player has fewer than ten holes.
pub fn performance_trends(table: &ScoreTable) -> Result<Vec<TrendRecord>, GolfError> {
    table
        .iter()
        .map(|player| performance_trend(&player.player_name, &player.scores))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_dev_needs_two_scores() {
        assert_eq!(sample_std_dev(&[3]), None);
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[2, 2, 2]), Some(0.0));
    }

    #[test]
    fn std_dev_uses_sample_denominator() {
        // mean 5, squared deviations sum to 32, 32 / 7
        let sd = sample_std_dev(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn running_average_tracks_prefixes() {
        assert_eq!(running_averages(&[2, 4, 6]), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn equal_halves_are_stable() {
        assert_eq!(classify_trend(3.0, 3.0), Trend::Stable);
        assert_eq!(classify_trend(3.0, 2.5), Trend::Improving);
        assert_eq!(classify_trend(2.5, 3.0), Trend::Declining);
    }
}
