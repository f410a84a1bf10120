#![allow(dead_code)]

use std::path::{Path, PathBuf};

use crazy_golf::args::CleanArgs;
use crazy_golf::model::ScoreTable;

pub const ALICE: [i32; 18] = [2, 3, 1, 4, 2, 2, 3, 5, 2, 2, 2, 1, 3, 2, 2, 3, 2, 2];
pub const BOB: [i32; 18] = [4, 4, 3, 5, 4, 6, 3, 4, 5, 3, 4, 4, 2, 3, 4, 3, 3, 4];

pub fn two_player_table() -> ScoreTable {
    [("Alice", ALICE.to_vec()), ("Bob", BOB.to_vec())]
        .into_iter()
        .collect()
}

pub fn write_scores_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("golf_scores.txt");
    std::fs::write(&path, contents).expect("write scores fixture");
    path
}

pub fn clean_args(scores_file: PathBuf, output_dir: PathBuf) -> CleanArgs {
    CleanArgs {
        scores_file,
        output_dir,
        html: false,
        json: None,
        chart: false,
    }
}
