use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score that still counts as a good hole.
pub const GOOD_HOLE_MAX: i32 = 2;
/// Lowest score that counts as a bad hole.
pub const BAD_HOLE_MIN: i32 = 4;
/// Holes before this index are the front nine, the rest the back nine.
pub const TREND_SPLIT: usize = 9;
/// Holes per course segment for the radar panel.
pub const SEGMENT_LEN: usize = 6;
pub const SEGMENT_LABELS: [&str; 3] = ["Holes 1-6", "Holes 7-12", "Holes 13-18"];
/// Buckets for the frequency heatmap; the last one collects everything above 6.
pub const FREQUENCY_LABELS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "6+"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub player_name: String,
    pub total: i32,
    pub average: f64,
    pub best: i32,
    pub worst: i32,
    pub consistency: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedPlayer {
    pub position: usize,
    pub player_name: String,
    pub total: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HoleAverage {
    /// 1-based hole number.
    pub hole: usize,
    pub average: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleDifficulty {
    /// Average across players for each shared hole, hole 1 first.
    pub averages: Vec<f64>,
    pub hardest: HoleAverage,
    pub easiest: HoleAverage,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerConsistency {
    pub player_name: String,
    pub consistency: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConsistencyExtremes {
    pub most_consistent: PlayerConsistency,
    pub least_consistent: PlayerConsistency,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AceRecord {
    pub player_name: String,
    pub holes: Vec<usize>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendRecord {
    pub player_name: String,
    pub front_nine_average: f64,
    pub back_nine_average: f64,
    pub trend: Trend,
    pub running_averages: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StreakRecord {
    pub player_name: String,
    pub longest_good_streak: usize,
    pub longest_bad_streak: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BounceBack {
    pub player_name: String,
    /// Mean score on the hole after a bad hole, `None` if there was no bad hole with a successor.
    pub after_bad: Option<f64>,
    /// Mean score on the hole after a good hole, `None` if there was no good hole with a successor.
    pub after_good: Option<f64>,
}

impl BounceBack {
    #[must_use]
    pub fn after_bad_or_zero(&self) -> f64 {
        self.after_bad.unwrap_or(0.0)
    }

    #[must_use]
    pub fn after_good_or_zero(&self) -> f64 {
        self.after_good.unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreFrequency {
    pub player_name: String,
    pub counts: [usize; 7],
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CumulativeScores {
    pub player_name: String,
    pub running_totals: Vec<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SegmentAverages {
    pub player_name: String,
    pub segments: [Option<f64>; 3],
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoxPlotStats {
    pub player_name: String,
    pub quartiles: Quartiles,
    /// Whisker ends: the most extreme scores within 1.5 IQR of the box.
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Everything derived from one score table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Analysis {
    pub summaries: Vec<PlayerSummary>,
    pub rankings: Vec<RankedPlayer>,
    pub hole_difficulty: HoleDifficulty,
    pub consistency: ConsistencyExtremes,
    pub aces: Vec<AceRecord>,
    pub trends: Vec<TrendRecord>,
    pub streaks: Vec<StreakRecord>,
    pub bounce_back: Vec<BounceBack>,
    pub frequencies: Vec<ScoreFrequency>,
    pub cumulative: Vec<CumulativeScores>,
    pub segments: Vec<SegmentAverages>,
    pub distributions: Vec<BoxPlotStats>,
}
