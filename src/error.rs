use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GolfError {
    #[error("io error: {0}")]
    Io(String),
    #[error("no players with scores to analyse")]
    EmptyTable,
    #[error("{player} has {count} score(s), at least {required} are needed for a standard deviation")]
    InsufficientScores {
        player: String,
        count: usize,
        required: usize,
    },
    #[error("{player} has {count} hole(s), at least {required} are needed to compare the front and back nine")]
    InsufficientHoles {
        player: String,
        count: usize,
        required: usize,
    },
    #[error("{player} has a score of {score} on hole {hole}, strokes must be positive")]
    InvalidScore {
        player: String,
        hole: usize,
        score: i32,
    },
    #[error("the total for {player} does not fit in a stroke count")]
    ScoreOverflow { player: String },
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for GolfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GolfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
