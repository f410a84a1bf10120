use crate::controller::score::score_aggregators::mean;
use crate::model::{BAD_HOLE_MIN, BounceBack, GOOD_HOLE_MAX, ScoreTable, StreakRecord};

#[must_use]
pub fn is_good_hole(score: i32) -> bool {
    score <= GOOD_HOLE_MAX
}

#[must_use]
pub fn is_bad_hole(score: i32) -> bool {
    score >= BAD_HOLE_MIN
}

/// Longest run of good holes and longest run of bad holes. A neutral hole
/// ends both runs; a good hole ends a bad run and the other way round.
#[must_use]
pub fn longest_streaks(player_name: &str, scores: &[i32]) -> StreakRecord {
    let mut current_good = 0;
    let mut current_bad = 0;
    let mut longest_good_streak = 0;
    let mut longest_bad_streak = 0;

    for &score in scores {
        if is_good_hole(score) {
            current_good += 1;
            current_bad = 0;
            longest_good_streak = longest_good_streak.max(current_good);
        } else if is_bad_hole(score) {
            current_bad += 1;
            current_good = 0;
            longest_bad_streak = longest_bad_streak.max(current_bad);
        } else {
            current_good = 0;
            current_bad = 0;
        }
    }

    StreakRecord {
        player_name: player_name.to_string(),
        longest_good_streak,
        longest_bad_streak,
    }
}

#[must_use]
pub fn streak_records(table: &ScoreTable) -> Vec<StreakRecord> {
    table
        .iter()
        .map(|player| longest_streaks(&player.player_name, &player.scores))
        .collect()
}

/// Mean score on the hole that follows a bad hole and on the hole that
/// follows a good hole. The last hole has no follower and is not counted.
#[must_use]
pub fn bounce_back(player_name: &str, scores: &[i32]) -> BounceBack {
    let mut after_bad: Vec<i32> = Vec::new();
    let mut after_good: Vec<i32> = Vec::new();

    for pair in scores.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if is_bad_hole(current) {
            after_bad.push(next);
        } else if is_good_hole(current) {
            after_good.push(next);
        }
    }

    BounceBack {
        player_name: player_name.to_string(),
        after_bad: mean(&after_bad),
        after_good: mean(&after_good),
    }
}

#[must_use]
pub fn bounce_back_records(table: &ScoreTable) -> Vec<BounceBack> {
    table
        .iter()
        .map(|player| bounce_back(&player.player_name, &player.scores))
        .collect()
}
