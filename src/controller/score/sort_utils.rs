use crate::model::{PlayerSummary, RankedPlayer};

/// Players by ascending total. The sort is stable, so equal totals keep
/// the order the players were listed in.
#[must_use]
pub fn rank_players(summaries: &[PlayerSummary]) -> Vec<RankedPlayer> {
    let mut sorted: Vec<&PlayerSummary> = summaries.iter().collect();

    sorted.sort_by_key(|summary| summary.total);

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, summary)| RankedPlayer {
            position: idx + 1,
            player_name: summary.player_name.clone(),
            total: summary.total,
        })
        .collect()
}
