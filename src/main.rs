use crazy_golf::args;
use crazy_golf::controller::loader::ScoreSource;
use crazy_golf::run_analysis;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = args::args_checks();

    let output = run_analysis(&args)?;

    println!("{}", output.report);

    if let Some(chart) = &output.chart_path {
        println!();
        println!("Chart saved to: {}", chart.display());
    }
    if let Some(html) = &output.html_path {
        println!("HTML report saved to: {}", html.display());
    }
    if let Some(json) = &output.json_path {
        println!("Metrics saved to: {}", json.display());
    }

    println!();
    if output.source == ScoreSource::DefaultTemplateCreated {
        println!("Created example file: {}", output.scores_file.display());
        println!("Edit this file with your actual scores and run the program again.");
    }
    println!(
        "To analyze different scores, edit the file: {}",
        output.scores_file.display()
    );

    Ok(())
}
