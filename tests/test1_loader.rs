mod common;

use crazy_golf::controller::loader::{
    ScoreSource, create_example_file, parse_line, parse_scores, read_scores_from_file,
};
use crazy_golf::model::{ScoreTable, default_scores, template_contents};

#[test]
fn test1_parse_line_skips_bad_tokens() {
    let parsed = parse_line("Player X: 2, a, 3  4");
    assert_eq!(parsed, Some(("Player X".to_string(), vec![2, 3, 4])));
}

#[test]
fn test1_parse_line_ignores_comments_and_junk() {
    assert_eq!(parse_line("# Alice: 1, 2, 3"), None);
    assert_eq!(parse_line("   "), None);
    assert_eq!(parse_line("no colon here 1 2 3"), None);
    assert_eq!(parse_line("Bob: x, y"), None);
}

#[test]
fn test1_parse_line_drops_non_positive_strokes() {
    let parsed = parse_line("Player Y: 3, 0, -2 4");
    assert_eq!(parsed, Some(("Player Y".to_string(), vec![3, 4])));
    assert_eq!(parse_line("Zero: 0 -1"), None);
}

#[test]
fn test1_empty_scores_are_not_inserted() {
    let mut table = ScoreTable::new();
    assert!(!table.insert("Nobody", vec![]));
    assert!(table.is_empty());

    assert!(table.insert("A", vec![2, 3]));
    assert!(!table.insert("A", vec![]));
    assert_eq!(table.get("A"), Some(&[2, 3][..]));
    assert_eq!(table.len(), 1);
}

#[test]
fn test1_duplicate_name_keeps_position() {
    let table = parse_scores("A: 1 2\nB: 3 4\nA: 5, 6, 7\n");
    let names: Vec<&str> = table.names().collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(table.get("A"), Some(&[5, 6, 7][..]));
}

#[test]
fn test1_template_parses_back_to_defaults() {
    assert_eq!(parse_scores(&template_contents()), default_scores());
}

#[test]
fn test1_missing_file_writes_template() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("golf_scores.txt");

    let loaded = read_scores_from_file(&path);
    assert_eq!(loaded.source, ScoreSource::DefaultTemplateCreated);
    assert!(loaded.source.is_default());
    assert_eq!(loaded.table, default_scores());
    assert_eq!(std::fs::read_to_string(&path)?, template_contents());

    let again = read_scores_from_file(&path);
    assert_eq!(again.source, ScoreSource::File);
    assert_eq!(again.table, default_scores());
    Ok(())
}

#[test]
fn test1_example_file_never_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = common::write_scores_file(dir.path(), "Mine: 1 2 3\n");

    assert!(create_example_file(&path).is_err());
    assert_eq!(std::fs::read_to_string(&path)?, "Mine: 1 2 3\n");
    Ok(())
}

#[test]
fn test1_file_without_scores_falls_back() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = common::write_scores_file(dir.path(), "# only a comment\n\nnothing: here\n");

    let loaded = read_scores_from_file(&path);
    assert_eq!(loaded.source, ScoreSource::DefaultNoValidScores);
    assert_eq!(loaded.table, default_scores());
    Ok(())
}

#[test]
fn test1_directory_is_unreadable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let loaded = read_scores_from_file(dir.path());
    assert_eq!(loaded.source, ScoreSource::DefaultUnreadable);
    assert_eq!(loaded.table.len(), 4);
    Ok(())
}

#[test]
fn test1_reads_user_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = common::write_scores_file(
        dir.path(),
        "Alice: 2 3 1 4\n# Carol: 9 9\nBob: 4,4,3,5\n",
    );

    let loaded = read_scores_from_file(&path);
    assert_eq!(loaded.source, ScoreSource::File);
    assert_eq!(loaded.table.len(), 2);
    assert_eq!(loaded.table.get("Bob"), Some(&[4, 4, 3, 5][..]));
    assert_eq!(loaded.table.get("Carol"), None);
    Ok(())
}
