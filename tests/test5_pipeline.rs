mod common;

use crazy_golf::args::paths::{resolve_output_dir, resolve_scores_file};
use crazy_golf::args::validation::{check_output_dir, check_parent_dir_is_writeable};
use crazy_golf::args::{CHART_FILE_NAME, HTML_FILE_NAME};
use crazy_golf::controller::loader::ScoreSource;
use crazy_golf::controller::pipeline::analyze_or_default;
use crazy_golf::model::{Analysis, ScoreTable, default_scores};
use crazy_golf::run_analysis;

#[test]
fn test5_full_run_writes_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out");
    let scores = common::write_scores_file(
        dir.path(),
        "Alice: 2 3 1 4 2 2 3 5 2 2 2 1\nBob: 4 4 3 5 4 6 3 4 5 3 4 4\n",
    );
    let json = dir.path().join("metrics.json");

    let mut args = common::clean_args(scores, out.clone());
    args.chart = true;
    args.html = true;
    args.json = Some(json.clone());

    let output = run_analysis(&args)?;
    assert_eq!(output.source, ScoreSource::File);
    assert!(output.used_loaded_scores);
    assert!(output.report.contains("Loaded scores for 2 players:"));
    assert_eq!(output.chart_path, Some(out.join(CHART_FILE_NAME)));
    assert_eq!(output.html_path, Some(out.join(HTML_FILE_NAME)));
    assert!(out.join(CHART_FILE_NAME).is_file());
    assert!(std::fs::read_to_string(out.join(HTML_FILE_NAME))?.contains("Alice"));

    let parsed: Analysis = serde_json::from_str(&std::fs::read_to_string(&json)?)?;
    assert_eq!(parsed.summaries.len(), 2);
    assert_eq!(parsed.rankings[0].player_name, "Alice");
    Ok(())
}

#[test]
fn test5_missing_file_runs_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let scores = dir.path().join("golf_scores.txt");
    let args = common::clean_args(scores.clone(), dir.path().join("out"));

    let output = run_analysis(&args)?;
    assert_eq!(output.source, ScoreSource::DefaultTemplateCreated);
    assert!(scores.is_file());
    assert!(output.chart_path.is_none());
    assert!(!dir.path().join("out").exists());
    assert!(output.report.contains("Player 3"));
    Ok(())
}

#[test]
fn test5_short_round_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let short: ScoreTable = [("Nine", vec![3; 9])].into_iter().collect();
    let (table, analysis, used_loaded) = analyze_or_default(short)?;
    assert!(!used_loaded);
    assert_eq!(table, default_scores());
    assert_eq!(analysis.summaries.len(), 4);
    Ok(())
}

#[test]
fn test5_path_resolution() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let home = dir.path().join("home");

    let fallback = resolve_scores_file(None, dir.path(), Some(&home));
    assert_eq!(fallback, home.join("Documents").join("golf_scores.txt"));

    let local = common::write_scores_file(dir.path(), "A: 1 2\n");
    assert_eq!(resolve_scores_file(None, dir.path(), Some(&home)), local);

    let explicit = dir.path().join("other.txt");
    assert_eq!(
        resolve_scores_file(Some(explicit.clone()), dir.path(), Some(&home)),
        explicit
    );

    assert_eq!(
        resolve_output_dir(None, None, Some(&home), dir.path()),
        home.join("Downloads")
    );
    assert_eq!(resolve_output_dir(None, None, None, dir.path()), dir.path());
    Ok(())
}

#[test]
fn test5_argument_checks() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let file = common::write_scores_file(dir.path(), "A: 1 2\n");
    let file_str = file.to_string_lossy().to_string();
    let dir_str = dir.path().to_string_lossy().to_string();

    assert!(check_output_dir(&dir_str).is_ok());
    assert!(check_output_dir(&format!("{dir_str}/not-yet")).is_ok());
    assert!(check_output_dir(&file_str).is_err());

    assert!(check_parent_dir_is_writeable(&format!("{dir_str}/m.json")).is_ok());
    assert!(check_parent_dir_is_writeable(&dir_str).is_err());
    assert!(check_parent_dir_is_writeable(&format!("{dir_str}/nope/m.json")).is_err());
    Ok(())
}
