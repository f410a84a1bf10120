use clap::Parser;
use std::path::PathBuf;

pub const SCORES_FILE_NAME: &str = "golf_scores.txt";
pub const CHART_FILE_NAME: &str = "crazy_golf_all_analysis.png";
pub const HTML_FILE_NAME: &str = "crazy_golf_report.html";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Score file to analyse. Defaults to ./golf_scores.txt if it exists, otherwise ~/Documents/golf_scores.txt.
    #[arg(short = 's', long, value_name = "SCORES_FILE")]
    pub scores: Option<PathBuf>,
    /// Where the chart and html report are written. Defaults to the Downloads folder.
    #[arg(
        short = 'o',
        long,
        value_name = "OUTPUT_DIR",
        value_parser = crate::args::validation::check_output_dir
    )]
    pub output_dir: Option<PathBuf>,
    /// Also write an html report next to the chart.
    #[arg(long)]
    pub html: bool,
    /// Write every computed metric as json to this file.
    #[arg(
        long,
        value_name = "JSON_FILE",
        value_parser = crate::args::validation::check_parent_dir_is_writeable
    )]
    pub json: Option<PathBuf>,
    /// Skip rendering the chart image.
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub scores_file: PathBuf,
    pub output_dir: PathBuf,
    pub html: bool,
    pub json: Option<PathBuf>,
    pub chart: bool,
}

impl CleanArgs {
    #[must_use]
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE_NAME)
    }

    #[must_use]
    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(HTML_FILE_NAME)
    }
}
