use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use crate::args::CleanArgs;
use crate::controller::loader::{ScoreSource, read_scores_from_file};
use crate::controller::score::{analysis_to_json, analyze};
use crate::model::{Analysis, ScoreTable, default_scores};
use crate::view::score::{render_chart, render_html_report, render_text_report};

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub report: String,
    pub source: ScoreSource,
    pub scores_file: PathBuf,
    pub chart_path: Option<PathBuf>,
    pub html_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    /// False when the loaded scores failed validation and the built-in ones
    /// were analysed instead.
    pub used_loaded_scores: bool,
}

/// Analyse the loaded table, or the built-in scores if it is unusable.
/// The built-in scores always pass validation.
///
/// # Errors
///
/// Will return `Err` only if the built-in scores are rejected too.
pub fn analyze_or_default(table: ScoreTable) -> Result<(ScoreTable, Analysis, bool)> {
    match analyze(&table) {
        Ok(analysis) => Ok((table, analysis, true)),
        Err(e) => {
            error!("Cannot analyse scores: {e}. Using default data.");
            let defaults = default_scores();
            let analysis = analyze(&defaults).context("analysing default scores")?;
            Ok((defaults, analysis, false))
        }
    }
}

/// Load, analyse and write every requested output.
///
/// # Errors
///
/// Will return `Err` if the output directory cannot be created or any
/// requested output cannot be written.
pub fn run_analysis(args: &CleanArgs) -> Result<PipelineOutput> {
    let loaded = read_scores_from_file(&args.scores_file);
    let (table, analysis, used_loaded_scores) = analyze_or_default(loaded.table)?;

    let report = render_text_report(&table, &analysis);

    let chart_path = if args.chart {
        fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("creating output directory {}", args.output_dir.display())
        })?;
        let path = args.chart_path();
        render_chart(&table, &analysis, &path)?;
        Some(path)
    } else {
        None
    };

    let html_path = if args.html {
        fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("creating output directory {}", args.output_dir.display())
        })?;
        let path = args.html_path();
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let markup = render_html_report(&analysis, &generated_at);
        fs::write(&path, markup.into_string())
            .with_context(|| format!("writing html report to {}", path.display()))?;
        info!("html report written to {}", path.display());
        Some(path)
    } else {
        None
    };

    let json_path = match &args.json {
        Some(path) => {
            let json = analysis_to_json(&analysis)?;
            fs::write(path, json)
                .with_context(|| format!("writing json to {}", path.display()))?;
            info!("json written to {}", path.display());
            Some(path.clone())
        }
        None => None,
    };

    Ok(PipelineOutput {
        report,
        source: loaded.source,
        scores_file: args.scores_file.clone(),
        chart_path,
        html_path,
        json_path,
        used_loaded_scores,
    })
}
