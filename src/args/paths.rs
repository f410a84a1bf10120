use std::path::{Path, PathBuf};

use super::types::{Args, CleanArgs, SCORES_FILE_NAME};

/// Pick the score file: an explicit path wins, then a file in the working
/// directory, then `~/Documents`. The last candidate is returned even if it
/// does not exist so the loader can write an example file there.
#[must_use]
pub fn resolve_scores_file(explicit: Option<PathBuf>, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    let local = cwd.join(SCORES_FILE_NAME);
    if local.exists() {
        return local;
    }

    match home {
        Some(home) => home.join("Documents").join(SCORES_FILE_NAME),
        None => local,
    }
}

/// Explicit directory, else the platform download dir, else `~/Downloads`,
/// else the working directory.
#[must_use]
pub fn resolve_output_dir(
    explicit: Option<PathBuf>,
    download_dir: Option<PathBuf>,
    home: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    explicit
        .or(download_dir)
        .or_else(|| home.map(|h| h.join("Downloads")))
        .unwrap_or_else(|| cwd.to_path_buf())
}

impl Args {
    #[must_use]
    pub fn clean(self) -> CleanArgs {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let home = dirs::home_dir();

        CleanArgs {
            scores_file: resolve_scores_file(self.scores, &cwd, home.as_deref()),
            output_dir: resolve_output_dir(
                self.output_dir,
                dirs::download_dir(),
                home.as_deref(),
                &cwd,
            ),
            html: self.html,
            json: self.json,
            chart: !self.no_chart,
        }
    }
}
