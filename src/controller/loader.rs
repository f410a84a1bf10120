use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::error::GolfError;
use crate::model::{ScoreTable, default_scores, template_contents};

static SCORE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("score separator pattern is valid"));

/// Where the scores for this run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    File,
    /// The file was read but had no usable player lines.
    DefaultNoValidScores,
    /// The file exists but could not be read as text.
    DefaultUnreadable,
    /// The file was missing, an example file was written in its place.
    DefaultTemplateCreated,
    /// The file was missing and the example file could not be written.
    DefaultMissing,
}

impl ScoreSource {
    #[must_use]
    pub fn is_default(self) -> bool {
        self != ScoreSource::File
    }
}

#[derive(Debug, Clone)]
pub struct LoadedScores {
    pub table: ScoreTable,
    pub source: ScoreSource,
}

impl LoadedScores {
    fn defaults(source: ScoreSource) -> Self {
        Self {
            table: default_scores(),
            source,
        }
    }
}

/// Parse one `Name: s1, s2 s3` line. Tokens that are not positive integers
/// are dropped. Blank lines, comments, lines without a colon and lines
/// without a single stroke count give `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, Vec<i32>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (name, scores_str) = line.split_once(':')?;
    let scores: Vec<i32> = SCORE_SEPARATOR
        .split(scores_str.trim())
        .filter_map(|token| token.parse::<i32>().ok())
        .filter(|&score| score > 0)
        .collect();

    if scores.is_empty() {
        debug!("skipping line without scores: {line}");
        return None;
    }

    Some((name.trim().to_string(), scores))
}

#[must_use]
pub fn parse_scores(contents: &str) -> ScoreTable {
    contents.lines().filter_map(parse_line).collect()
}

/// Read a score file, falling back to the built-in scores when it is missing,
/// unreadable or has nothing usable in it. A missing file is replaced with an
/// example file the user can edit.
pub fn read_scores_from_file(path: &Path) -> LoadedScores {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "File '{}' not found. Creating example file and using default data.",
                path.display()
            );
            return match create_example_file(path) {
                Ok(()) => LoadedScores::defaults(ScoreSource::DefaultTemplateCreated),
                Err(e) => {
                    warn!("Could not create example file: {e}");
                    LoadedScores::defaults(ScoreSource::DefaultMissing)
                }
            };
        }
        Err(e) => {
            warn!(
                "Could not read '{}': {e}. Using default data.",
                path.display()
            );
            return LoadedScores::defaults(ScoreSource::DefaultUnreadable);
        }
    };

    let table = parse_scores(&contents);
    if table.is_empty() {
        warn!("No valid scores found in file. Using default data.");
        return LoadedScores::defaults(ScoreSource::DefaultNoValidScores);
    }

    info!("read {} players from {}", table.len(), path.display());
    LoadedScores {
        table,
        source: ScoreSource::File,
    }
}

/// Write the example score file. Never replaces an existing file.
///
/// # Errors
///
/// Will return `Err` if the file already exists or cannot be written.
pub fn create_example_file(path: &Path) -> Result<(), GolfError> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(template_contents().as_bytes())?;
    info!("Created example file: {}", path.display());
    Ok(())
}
