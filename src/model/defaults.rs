use crate::model::score::ScoreTable;

pub const DEFAULT_SCORES: [(&str, [i32; 18]); 4] = [
    ("Player 1", [2, 2, 2, 5, 2, 2, 4, 2, 2, 5, 3, 2, 2, 2, 2, 2, 3, 2]),
    ("Player 2", [3, 2, 2, 3, 3, 4, 3, 2, 2, 4, 3, 3, 2, 1, 2, 3, 2, 1]),
    ("Player 3", [4, 5, 3, 3, 4, 4, 5, 2, 2, 6, 2, 3, 1, 3, 5, 2, 3, 6]),
    ("Player 4", [2, 2, 2, 2, 2, 2, 3, 3, 3, 2, 2, 5, 5, 3, 5, 3, 2, 2]),
];

const TEMPLATE_FOOTER: &str = "# Format: PlayerName: score1, score2, score3, ...
# You can use commas or spaces to separate scores
# Lines starting with # are ignored
";

#[must_use]
pub fn default_scores() -> ScoreTable {
    DEFAULT_SCORES
        .iter()
        .map(|(name, scores)| (*name, scores.to_vec()))
        .collect()
}

/// Contents of the example score file written when none exists yet.
#[must_use]
pub fn template_contents() -> String {
    let lines: Vec<String> = DEFAULT_SCORES
        .iter()
        .map(|(name, scores)| {
            let scores: Vec<String> = scores.iter().map(ToString::to_string).collect();
            format!("{name}: {}", scores.join(", "))
        })
        .collect();

    format!("{}\n\n{TEMPLATE_FOOTER}", lines.join("\n"))
}
