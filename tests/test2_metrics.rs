mod common;

use approx::assert_relative_eq;
use crazy_golf::GolfError;
use crazy_golf::controller::loader::parse_scores;
use crazy_golf::controller::score::{
    analyze, consistency_extremes, cumulative_scores, find_aces, hole_difficulty,
    player_summaries, player_summary, rank_players, validate,
};
use crazy_golf::model::{PlayerSummary, ScoreTable, Trend, default_scores};

#[test]
fn test2_default_totals_and_rankings() -> Result<(), GolfError> {
    let analysis = analyze(&default_scores())?;

    let totals: Vec<i32> = analysis.summaries.iter().map(|s| s.total).collect();
    assert_eq!(totals, vec![46, 45, 63, 50]);

    let order: Vec<(usize, &str, i32)> = analysis
        .rankings
        .iter()
        .map(|r| (r.position, r.player_name.as_str(), r.total))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "Player 2", 45),
            (2, "Player 1", 46),
            (3, "Player 4", 50),
            (4, "Player 3", 63),
        ]
    );
    Ok(())
}

#[test]
fn test2_summary_fields() -> Result<(), GolfError> {
    let summary = player_summary("Bob", &[3, 5, 4])?;
    assert_eq!(summary.total, 12);
    assert_eq!(summary.best, 3);
    assert_eq!(summary.worst, 5);
    assert_relative_eq!(summary.average, 4.0);
    assert_relative_eq!(summary.consistency, 1.0);
    Ok(())
}

#[test]
fn test2_ranking_ties_keep_input_order() {
    let summary = |name: &str, total: i32| PlayerSummary {
        player_name: name.to_string(),
        total,
        average: 0.0,
        best: 0,
        worst: 0,
        consistency: 0.0,
    };
    let ranked = rank_players(&[summary("C", 40), summary("A", 38), summary("B", 40)]);
    let names: Vec<&str> = ranked.iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "B"]);
    assert_eq!(ranked[2].position, 3);
}

#[test]
fn test2_flat_course_picks_first_hole() {
    let table: ScoreTable = [("A", vec![3; 12]), ("B", vec![3; 12])]
        .into_iter()
        .collect();
    let difficulty = hole_difficulty(&table).expect("non-empty table");
    assert_eq!(difficulty.averages.len(), 12);
    for average in &difficulty.averages {
        assert_relative_eq!(*average, 3.0);
    }
    assert_eq!(difficulty.hardest.hole, 1);
    assert_eq!(difficulty.easiest.hole, 1);
}

#[test]
fn test2_totals_match_scores() -> Result<(), GolfError> {
    let table = common::two_player_table();
    let analysis = analyze(&table)?;
    for (player, summary) in table.iter().zip(&analysis.summaries) {
        let total: i32 = player.scores.iter().sum();
        assert_eq!(summary.player_name, player.player_name);
        assert_eq!(summary.total, total);
        assert_relative_eq!(
            summary.average,
            f64::from(total) / player.scores.len() as f64
        );
    }
    Ok(())
}

#[test]
fn test2_difficulty_uses_shared_holes() {
    let table: ScoreTable = [("A", vec![2, 5, 3, 9]), ("B", vec![2, 3, 1])]
        .into_iter()
        .collect();
    let difficulty = hole_difficulty(&table).expect("non-empty table");
    assert_eq!(difficulty.averages.len(), 3);
    assert_eq!(difficulty.hardest.hole, 2);
    assert_relative_eq!(difficulty.hardest.average, 4.0);
    assert_eq!(difficulty.easiest.hole, 1);
}

#[test]
fn test2_validate_rejects_short_rounds() {
    let one: ScoreTable = [("Solo", vec![3])].into_iter().collect();
    assert!(matches!(
        validate(&one),
        Err(GolfError::InsufficientScores { count: 1, .. })
    ));

    let nine: ScoreTable = [("Nine", vec![3; 9])].into_iter().collect();
    assert!(matches!(
        validate(&nine),
        Err(GolfError::InsufficientHoles { count: 9, required: 10, .. })
    ));

    assert_eq!(validate(&ScoreTable::new()), Err(GolfError::EmptyTable));
    assert!(validate(&common::two_player_table()).is_ok());
}

#[test]
fn test2_aces_and_trends() -> Result<(), GolfError> {
    let defaults = default_scores();
    let aces = find_aces(&defaults);
    let found: Vec<(&str, &[usize])> = aces
        .iter()
        .map(|a| (a.player_name.as_str(), a.holes.as_slice()))
        .collect();
    assert_eq!(
        found,
        vec![("Player 2", &[14, 18][..]), ("Player 3", &[13][..])]
    );

    let analysis = analyze(&defaults)?;
    let player2 = &analysis.trends[1];
    assert_relative_eq!(player2.front_nine_average, 24.0 / 9.0);
    assert_relative_eq!(player2.back_nine_average, 21.0 / 9.0);
    assert_eq!(player2.trend, Trend::Improving);
    assert_eq!(player2.running_averages.len(), 18);
    assert_relative_eq!(player2.running_averages[17], 2.5);
    Ok(())
}

#[test]
fn test2_consistency_extremes() -> Result<(), GolfError> {
    let analysis = analyze(&default_scores())?;
    let most = &analysis.consistency.most_consistent;
    let least = &analysis.consistency.least_consistent;
    assert_eq!(most.player_name, "Player 2");
    assert_eq!(least.player_name, "Player 3");
    assert!(most.consistency < least.consistency);
    Ok(())
}

#[test]
fn test2_consistency_ties_go_to_first_player() -> Result<(), GolfError> {
    let alternating: Vec<i32> = [2, 4].repeat(5);
    let table: ScoreTable = [("First", alternating.clone()), ("Second", alternating)]
        .into_iter()
        .collect();
    let analysis = analyze(&table)?;
    assert_eq!(analysis.consistency.most_consistent.player_name, "First");
    assert_eq!(analysis.consistency.least_consistent.player_name, "First");

    let spread: ScoreTable = [
        ("Steady", vec![3; 10]),
        ("Wild", [1, 5].repeat(5)),
        ("Also steady", vec![2; 10]),
        ("Also wild", [1, 5].repeat(5)),
    ]
    .into_iter()
    .collect();
    let extremes = consistency_extremes(&player_summaries(&spread)?).expect("four players");
    assert_eq!(extremes.most_consistent.player_name, "Steady");
    assert_eq!(extremes.least_consistent.player_name, "Wild");
    Ok(())
}

#[test]
fn test2_huge_scores_report_overflow() {
    let table = parse_scores(
        "Big: 2000000000 2000000000 3 3 3 3 3 3 3 3\nSmall: 3 3 3 3 3 3 3 3 3 3\n",
    );
    assert_eq!(table.len(), 2);
    assert!(matches!(
        analyze(&table),
        Err(GolfError::ScoreOverflow { player }) if player == "Big"
    ));
    assert!(matches!(
        player_summary("Big", table.get("Big").expect("parsed")),
        Err(GolfError::ScoreOverflow { .. })
    ));

    let cumulative = cumulative_scores("Big", &[2_000_000_000, 2_000_000_000]);
    assert_eq!(cumulative.running_totals, vec![2_000_000_000, 4_000_000_000]);
}

#[test]
fn test2_validate_rejects_non_positive_scores() {
    let mut scores = vec![3; 12];
    scores[4] = 0;
    let table: ScoreTable = [("Zero", scores)].into_iter().collect();
    assert!(matches!(
        validate(&table),
        Err(GolfError::InvalidScore { hole: 5, score: 0, .. })
    ));
}
