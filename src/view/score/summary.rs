use crate::model::{Analysis, ScoreTable};
use crate::view::score::utils::format_holes;

const RULE_WIDTH: usize = 50;

/// Plain-text report printed after every run.
#[must_use]
pub fn render_text_report(table: &ScoreTable, analysis: &Analysis) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Loaded scores for {} players:", table.len()));
    for player in table {
        lines.push(format!(
            "  {}: {} holes",
            player.player_name,
            player.scores.len()
        ));
    }
    lines.push(String::new());

    lines.push("CRAZY GOLF SCORE ANALYSIS".to_string());
    lines.push("=".repeat(RULE_WIDTH));

    lines.push(String::new());
    lines.push("PLAYER SUMMARY:".to_string());
    for summary in &analysis.summaries {
        lines.push(String::new());
        lines.push(format!("{}:", summary.player_name));
        lines.push(format!("  Total Score: {}", summary.total));
        lines.push(format!("  Average: {:.2}", summary.average));
        lines.push(format!("  Best Hole: {}", summary.best));
        lines.push(format!("  Worst Hole: {}", summary.worst));
        lines.push(format!("  Consistency (std dev): {:.2}", summary.consistency));
    }

    lines.push(String::new());
    lines.push("RANKINGS:".to_string());
    for ranked in &analysis.rankings {
        lines.push(format!(
            "{}. {} - {} strokes",
            ranked.position, ranked.player_name, ranked.total
        ));
    }

    let difficulty = &analysis.hole_difficulty;
    lines.push(String::new());
    lines.push("HOLE DIFFICULTY ANALYSIS:".to_string());
    for (idx, average) in difficulty.averages.iter().enumerate() {
        lines.push(format!("Hole {}: {average:.2} average", idx + 1));
    }
    lines.push(String::new());
    lines.push(format!(
        "Hardest Hole: #{} (avg: {:.2})",
        difficulty.hardest.hole, difficulty.hardest.average
    ));
    lines.push(format!(
        "Easiest Hole: #{} (avg: {:.2})",
        difficulty.easiest.hole, difficulty.easiest.average
    ));

    let consistency = &analysis.consistency;
    lines.push(String::new());
    lines.push("PERFORMANCE INSIGHTS:".to_string());
    lines.push(format!(
        "Most Consistent: {} (std dev: {:.2})",
        consistency.most_consistent.player_name, consistency.most_consistent.consistency
    ));
    lines.push(format!(
        "Least Consistent: {} (std dev: {:.2})",
        consistency.least_consistent.player_name, consistency.least_consistent.consistency
    ));

    lines.push(String::new());
    lines.push("ACE ANALYSIS:".to_string());
    if analysis.aces.is_empty() {
        lines.push("No hole-in-ones this round.".to_string());
    }
    for ace in &analysis.aces {
        lines.push(format!(
            "{}: {} hole-in-one(s) on hole(s) {}",
            ace.player_name,
            ace.holes.len(),
            format_holes(&ace.holes)
        ));
    }

    lines.push(String::new());
    lines.push("PERFORMANCE TRENDS:".to_string());
    for trend in &analysis.trends {
        lines.push(format!(
            "{}: First 9 avg: {:.2}, Last 9 avg: {:.2} - {}",
            trend.player_name, trend.front_nine_average, trend.back_nine_average, trend.trend
        ));
    }

    lines.join("\n")
}
