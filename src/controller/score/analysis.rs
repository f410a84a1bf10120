use tracing::debug;

use crate::controller::score::chart_data::{
    box_plot_stats, cumulative_scores, score_frequency, segment_averages,
};
use crate::controller::score::score_aggregators::{
    MIN_HOLES_FOR_TREND, MIN_SCORES_FOR_SPREAD, checked_total, consistency_extremes, find_aces, hole_difficulty,
    performance_trends, player_summaries,
};
use crate::controller::score::sort_utils::rank_players;
use crate::controller::score::streaks::{bounce_back_records, streak_records};
use crate::error::GolfError;
use crate::model::{Analysis, ScoreTable};

/// Check the table has enough data for every metric.
///
/// # Errors
///
/// Will return `Err` if the table is empty, if a player has fewer than two
/// scores or fewer than ten holes, if a score is not positive, or if a total
/// overflows.
pub fn validate(table: &ScoreTable) -> Result<(), GolfError> {
    if table.is_empty() {
        return Err(GolfError::EmptyTable);
    }

    for player in table {
        let count = player.scores.len();
        if count < MIN_SCORES_FOR_SPREAD {
            return Err(GolfError::InsufficientScores {
                player: player.player_name.clone(),
                count,
                required: MIN_SCORES_FOR_SPREAD,
            });
        }
        if count < MIN_HOLES_FOR_TREND {
            return Err(GolfError::InsufficientHoles {
                player: player.player_name.clone(),
                count,
                required: MIN_HOLES_FOR_TREND,
            });
        }
        let non_positive = player
            .scores
            .iter()
            .enumerate()
            .find(|&(_, &score)| score <= 0);
        if let Some((idx, &score)) = non_positive {
            return Err(GolfError::InvalidScore {
                player: player.player_name.clone(),
                hole: idx + 1,
                score,
            });
        }
        checked_total(&player.player_name, &player.scores)?;
    }

    Ok(())
}

/// # Errors
///
/// Will return `Err` if [`validate`] rejects the table.
pub fn analyze(table: &ScoreTable) -> Result<Analysis, GolfError> {
    validate(table)?;

    let summaries = player_summaries(table)?;
    let rankings = rank_players(&summaries);
    let hole_difficulty = hole_difficulty(table).ok_or(GolfError::EmptyTable)?;
    let consistency = consistency_extremes(&summaries).ok_or(GolfError::EmptyTable)?;
    let trends = performance_trends(table)?;

    if table.shared_holes() != table.max_holes() {
        debug!(
            "hole counts differ, hole difficulty covers the first {} holes",
            table.shared_holes()
        );
    }

    Ok(Analysis {
        summaries,
        rankings,
        hole_difficulty,
        consistency,
        aces: find_aces(table),
        trends,
        streaks: streak_records(table),
        bounce_back: bounce_back_records(table),
        frequencies: table
            .iter()
            .map(|p| score_frequency(&p.player_name, &p.scores))
            .collect(),
        cumulative: table
            .iter()
            .map(|p| cumulative_scores(&p.player_name, &p.scores))
            .collect(),
        segments: table
            .iter()
            .map(|p| segment_averages(&p.player_name, &p.scores))
            .collect(),
        distributions: table
            .iter()
            .filter_map(|p| box_plot_stats(&p.player_name, &p.scores))
            .collect(),
    })
}

/// Pretty-printed JSON of every metric in `analysis`.
///
/// # Errors
///
/// Will return `Err` if serialization fails.
pub fn analysis_to_json(analysis: &Analysis) -> Result<String, GolfError> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
