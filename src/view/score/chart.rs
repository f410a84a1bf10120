use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use std::ops::Range;
use std::path::Path;
use tracing::info;

use crate::model::{Analysis, BounceBack, FREQUENCY_LABELS, SEGMENT_LABELS, ScoreTable};
use crate::view::score::utils::{
    BAD_HOLE_COLOR, GOOD_HOLE_COLOR, heat_color, player_color, short_player_name,
};

pub const CHART_SIZE: (u32, u32) = (2400, 1920);

const BAR_WIDTH: f64 = 0.35;
const NAME_WIDTH: usize = 12;
const GRID_COLOR: RGBColor = RGBColor(200, 200, 200);

fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn caption_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Bold)
}

fn anchored(size: f64, color: &RGBColor, v_pos: VPos) -> TextStyle<'static> {
    font(size).color(color).pos(Pos::new(HPos::Center, v_pos))
}

fn padded_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(1.0, f64::max) * 1.15
}

/// One slot per player centred on 0, 1, 2, ...
fn category_axis(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

fn hole_axis(holes: usize) -> Range<f64> {
    0.5..(holes.max(1) as f64 + 0.5)
}

fn nearest_index(value: f64) -> Option<usize> {
    let nearest = value.round();
    if (value - nearest).abs() > 1e-6 || nearest < 0.0 {
        return None;
    }
    Some(nearest as usize)
}

fn category_label(names: &[String]) -> impl Fn(&f64) -> String + '_ {
    move |value: &f64| {
        nearest_index(*value)
            .and_then(|idx| names.get(idx))
            .map(|name| short_player_name(name, NAME_WIDTH))
            .unwrap_or_default()
    }
}

fn hole_label(value: &f64) -> String {
    nearest_index(*value)
        .filter(|&hole| hole > 0)
        .map(|hole| hole.to_string())
        .unwrap_or_default()
}

/// Render the nine-panel dashboard to a PNG at `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Will return `Err` if drawing fails or the image cannot be written.
pub fn render_chart(table: &ScoreTable, analysis: &Analysis, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_dashboard(&root, table, analysis)?;
    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    info!("chart written to {}", path.display());
    Ok(())
}

/// # Errors
///
/// Will return `Err` if any panel fails to draw.
pub fn draw_dashboard<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &ScoreTable,
    analysis: &Analysis,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 3));

    draw_total_scores(&panels[0], analysis)?;
    draw_distribution(&panels[1], analysis)?;
    draw_hole_difficulty(&panels[2], analysis)?;
    draw_player_holes(&panels[3], table)?;
    draw_frequency_heatmap(&panels[4], analysis)?;
    draw_cumulative(&panels[5], analysis)?;
    draw_segment_radar(&panels[6], analysis)?;
    draw_bounce_back(&panels[7], analysis)?;
    draw_streaks(&panels[8], analysis)?;
    Ok(())
}

fn draw_total_scores<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let names: Vec<String> = analysis
        .summaries
        .iter()
        .map(|s| s.player_name.clone())
        .collect();
    let totals: Vec<f64> = analysis
        .summaries
        .iter()
        .map(|s| f64::from(s.total))
        .collect();
    let y_max = padded_max(totals.iter().copied());

    let mut chart = ChartBuilder::on(area)
        .caption("Total Scores Comparison", caption_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(category_axis(names.len()), 0.0..y_max)?;

    let labels = category_label(&names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 1)
        .x_label_formatter(&labels)
        .y_desc("Total Strokes")
        .label_style(font(16.0))
        .draw()?;

    chart.draw_series(totals.iter().enumerate().map(|(idx, &total)| {
        let x = idx as f64;
        Rectangle::new(
            [(x - BAR_WIDTH, 0.0), (x + BAR_WIDTH, total)],
            player_color(idx).filled(),
        )
    }))?;
    chart.draw_series(totals.iter().enumerate().map(|(idx, &total)| {
        Text::new(
            format!("{total:.0}"),
            (idx as f64, total + y_max * 0.01),
            anchored(18.0, &BLACK, VPos::Bottom),
        )
    }))?;

    Ok(())
}

fn draw_distribution<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let names: Vec<String> = analysis
        .distributions
        .iter()
        .map(|d| d.player_name.clone())
        .collect();
    let y_max = analysis
        .distributions
        .iter()
        .map(|d| d.quartiles.max)
        .fold(1.0, f64::max)
        + 1.0;

    let mut chart = ChartBuilder::on(area)
        .caption("Score Distribution by Player", caption_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(category_axis(names.len()), 0.0..y_max)?;

    let labels = category_label(&names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 1)
        .x_label_formatter(&labels)
        .y_desc("Score")
        .label_style(font(16.0))
        .draw()?;

    for (idx, stats) in analysis.distributions.iter().enumerate() {
        let x = idx as f64;
        let q = stats.quartiles;
        let cap = BAR_WIDTH / 2.0;
        let plot = chart.plotting_area();

        plot.draw(&Rectangle::new(
            [(x - BAR_WIDTH, q.q1), (x + BAR_WIDTH, q.q3)],
            player_color(idx).filled(),
        ))?;
        plot.draw(&Rectangle::new(
            [(x - BAR_WIDTH, q.q1), (x + BAR_WIDTH, q.q3)],
            BLACK.stroke_width(2),
        ))?;
        plot.draw(&PathElement::new(
            vec![(x - BAR_WIDTH, q.median), (x + BAR_WIDTH, q.median)],
            BLACK.stroke_width(3),
        ))?;
        plot.draw(&PathElement::new(
            vec![(x, stats.whisker_low), (x, q.q1)],
            BLACK.stroke_width(2),
        ))?;
        plot.draw(&PathElement::new(
            vec![(x, q.q3), (x, stats.whisker_high)],
            BLACK.stroke_width(2),
        ))?;
        for whisker in [stats.whisker_low, stats.whisker_high] {
            plot.draw(&PathElement::new(
                vec![(x - cap, whisker), (x + cap, whisker)],
                BLACK.stroke_width(2),
            ))?;
        }
        for &outlier in &stats.outliers {
            plot.draw(&Circle::new((x, outlier), 5, BLACK.stroke_width(1)))?;
        }
    }

    Ok(())
}

fn draw_hole_difficulty<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let averages = &analysis.hole_difficulty.averages;
    let y_max = padded_max(averages.iter().copied());

    let mut chart = ChartBuilder::on(area)
        .caption("Hole Difficulty (Average Score)", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(hole_axis(averages.len()), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(averages.len() + 1)
        .x_label_formatter(&hole_label)
        .x_desc("Hole Number")
        .y_desc("Average Score")
        .light_line_style(GRID_COLOR.mix(0.3))
        .label_style(font(16.0))
        .draw()?;

    let points: Vec<(f64, f64)> = averages
        .iter()
        .enumerate()
        .map(|(idx, &average)| ((idx + 1) as f64, average))
        .collect();
    chart.draw_series(LineSeries::new(
        points.clone(),
        BAD_HOLE_COLOR.stroke_width(3),
    ))?;
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 6, BAD_HOLE_COLOR.filled())),
    )?;

    Ok(())
}

fn draw_player_holes<DB>(area: &DrawingArea<DB, Shift>, table: &ScoreTable) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let holes = table.max_holes();
    let y_max = f64::from(
        table
            .iter()
            .flat_map(|p| p.scores.iter().copied())
            .max()
            .unwrap_or(1),
    ) + 1.0;

    let mut chart = ChartBuilder::on(area)
        .caption("Player Performance by Hole", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(hole_axis(holes), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(holes + 1)
        .x_label_formatter(&hole_label)
        .x_desc("Hole Number")
        .y_desc("Strokes")
        .light_line_style(GRID_COLOR.mix(0.3))
        .label_style(font(16.0))
        .draw()?;

    for (idx, player) in table.iter().enumerate() {
        let color = player_color(idx);
        let points: Vec<(f64, f64)> = player
            .scores
            .iter()
            .enumerate()
            .map(|(hole, &score)| ((hole + 1) as f64, f64::from(score)))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(player.player_name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(font(14.0))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

fn draw_frequency_heatmap<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let rows = analysis.frequencies.len();
    // row 0 is drawn at the top
    let names: Vec<String> = analysis
        .frequencies
        .iter()
        .rev()
        .map(|f| f.player_name.clone())
        .collect();
    let busiest = analysis
        .frequencies
        .iter()
        .flat_map(|f| f.counts.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Score Frequency Heatmap", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(category_axis(FREQUENCY_LABELS.len()), category_axis(rows))?;

    let bucket_label = |value: &f64| {
        nearest_index(*value)
            .and_then(|idx| FREQUENCY_LABELS.get(idx))
            .map(ToString::to_string)
            .unwrap_or_default()
    };
    let player_label = category_label(&names);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(FREQUENCY_LABELS.len() + 1)
        .y_labels(rows + 1)
        .x_label_formatter(&bucket_label)
        .y_label_formatter(&player_label)
        .x_desc("Score")
        .y_desc("Player")
        .label_style(font(16.0))
        .draw()?;

    for (row, frequency) in analysis.frequencies.iter().enumerate() {
        let y = (rows - 1 - row) as f64;
        for (col, &count) in frequency.counts.iter().enumerate() {
            let x = col as f64;
            let fraction = count as f64 / busiest;
            let text_color = if fraction > 0.6 { WHITE } else { BLACK };
            let plot = chart.plotting_area();
            plot.draw(&Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                heat_color(fraction).filled(),
            ))?;
            plot.draw(&Text::new(
                count.to_string(),
                (x, y),
                anchored(18.0, &text_color, VPos::Center),
            ))?;
        }
    }

    Ok(())
}

fn draw_cumulative<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let holes = analysis
        .cumulative
        .iter()
        .map(|c| c.running_totals.len())
        .max()
        .unwrap_or(0);
    let y_max = padded_max(
        analysis
            .cumulative
            .iter()
            .filter_map(|c| c.running_totals.last())
            .map(|&total| total as f64),
    );

    let mut chart = ChartBuilder::on(area)
        .caption("Cumulative Score Progression", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(hole_axis(holes), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(holes + 1)
        .x_label_formatter(&hole_label)
        .x_desc("Hole Number")
        .y_desc("Cumulative Strokes")
        .light_line_style(GRID_COLOR.mix(0.3))
        .label_style(font(16.0))
        .draw()?;

    for (idx, cumulative) in analysis.cumulative.iter().enumerate() {
        let color = player_color(idx);
        let points: Vec<(f64, f64)> = cumulative
            .running_totals
            .iter()
            .enumerate()
            .map(|(hole, &total)| ((hole + 1) as f64, total as f64))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(cumulative.player_name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(font(14.0))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn radar_point(radius: f64, spoke: usize) -> (f64, f64) {
    let angle = spoke as f64 * 2.0 * PI / SEGMENT_LABELS.len() as f64;
    (radius * angle.cos(), radius * angle.sin())
}

fn draw_segment_radar<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let max_value = analysis
        .segments
        .iter()
        .flat_map(|s| s.segments.iter().flatten().copied())
        .fold(1.0, f64::max);
    let radius = max_value.ceil();
    let extent = radius * 1.45;
    let (width, height) = area.dim_in_pixel();
    let aspect = f64::from(width) / f64::from(height.max(1));

    let mut chart = ChartBuilder::on(area)
        .caption("Performance by Course Segment (Lower = Better)", caption_font())
        .margin(20)
        .build_cartesian_2d(-extent * aspect..extent * aspect, -extent..extent)?;

    let rings = radius as usize;
    for ring in 1..=rings {
        let r = ring as f64;
        let circle: Vec<(f64, f64)> = (0..=72)
            .map(|step| {
                let angle = f64::from(step) * PI / 36.0;
                (r * angle.cos(), r * angle.sin())
            })
            .collect();
        chart
            .plotting_area()
            .draw(&PathElement::new(circle, GRID_COLOR.stroke_width(1)))?;
        chart.plotting_area().draw(&Text::new(
            ring.to_string(),
            (0.05, r),
            anchored(14.0, &BLACK, VPos::Bottom),
        ))?;
    }

    for (spoke, label) in SEGMENT_LABELS.iter().enumerate() {
        chart.plotting_area().draw(&PathElement::new(
            vec![(0.0, 0.0), radar_point(radius, spoke)],
            GRID_COLOR.stroke_width(1),
        ))?;
        chart.plotting_area().draw(&Text::new(
            (*label).to_string(),
            radar_point(radius * 1.2, spoke),
            anchored(16.0, &BLACK, VPos::Center),
        ))?;
    }

    for (idx, segment) in analysis.segments.iter().enumerate() {
        let color = player_color(idx);
        let points: Vec<(f64, f64)> = segment
            .segments
            .iter()
            .enumerate()
            .map(|(spoke, value)| radar_point(value.unwrap_or(0.0), spoke))
            .collect();

        chart
            .plotting_area()
            .draw(&Polygon::new(points.clone(), color.mix(0.25).filled()))?;

        let mut outline = points.clone();
        outline.extend(points.first().copied());
        chart
            .draw_series(LineSeries::new(outline, color.stroke_width(2)))?
            .label(segment.player_name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 5, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(font(14.0))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

/// Players with at least one bad hole, the same set the bounce-back panel shows.
#[must_use]
pub fn bounce_back_rows(analysis: &Analysis) -> Vec<&BounceBack> {
    analysis
        .bounce_back
        .iter()
        .filter(|b| b.after_bad.is_some())
        .collect()
}

fn draw_bounce_back<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let rows = bounce_back_rows(analysis);
    let names: Vec<String> = rows.iter().map(|b| b.player_name.clone()).collect();
    let y_max = padded_max(
        rows.iter()
            .flat_map(|b| [b.after_bad_or_zero(), b.after_good_or_zero()]),
    );

    let mut chart = ChartBuilder::on(area)
        .caption("Mental Resilience Analysis", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(category_axis(names.len()), 0.0..y_max)?;

    let labels = category_label(&names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 1)
        .x_label_formatter(&labels)
        .x_desc("Player")
        .y_desc("Avg Next Score")
        .light_line_style(GRID_COLOR.mix(0.3))
        .label_style(font(16.0))
        .draw()?;

    chart
        .draw_series(rows.iter().enumerate().map(|(idx, bounce)| {
            let x = idx as f64;
            Rectangle::new(
                [(x - BAR_WIDTH, 0.0), (x, bounce.after_bad_or_zero())],
                BAD_HOLE_COLOR.mix(0.8).filled(),
            )
        }))?
        .label("After Bad Hole (4+)")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], BAD_HOLE_COLOR.filled()));
    chart
        .draw_series(rows.iter().enumerate().map(|(idx, bounce)| {
            let x = idx as f64;
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, bounce.after_good_or_zero())],
                GOOD_HOLE_COLOR.mix(0.8).filled(),
            )
        }))?
        .label("After Good Hole (1-2)")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], GOOD_HOLE_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(font(14.0))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

fn draw_streaks<DB>(area: &DrawingArea<DB, Shift>, analysis: &Analysis) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let names: Vec<String> = analysis
        .streaks
        .iter()
        .map(|s| s.player_name.clone())
        .collect();
    let y_max = padded_max(analysis.streaks.iter().flat_map(|s| {
        [
            s.longest_good_streak as f64,
            s.longest_bad_streak as f64,
        ]
    }));

    let mut chart = ChartBuilder::on(area)
        .caption("Consistency Streaks Analysis", caption_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(category_axis(names.len()), 0.0..y_max)?;

    let labels = category_label(&names);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len() + 1)
        .x_label_formatter(&labels)
        .x_desc("Player")
        .y_desc("Consecutive Holes")
        .light_line_style(GRID_COLOR.mix(0.3))
        .label_style(font(16.0))
        .draw()?;

    let good: Vec<(f64, f64)> = analysis
        .streaks
        .iter()
        .enumerate()
        .map(|(idx, s)| (idx as f64 - BAR_WIDTH / 2.0, s.longest_good_streak as f64))
        .collect();
    let bad: Vec<(f64, f64)> = analysis
        .streaks
        .iter()
        .enumerate()
        .map(|(idx, s)| (idx as f64 + BAR_WIDTH / 2.0, s.longest_bad_streak as f64))
        .collect();

    chart
        .draw_series(good.iter().map(|&(x, value)| {
            Rectangle::new(
                [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, value)],
                GOOD_HOLE_COLOR.mix(0.8).filled(),
            )
        }))?
        .label("Longest Good Streak (≤2)")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], GOOD_HOLE_COLOR.filled()));
    chart
        .draw_series(bad.iter().map(|&(x, value)| {
            Rectangle::new(
                [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, value)],
                BAD_HOLE_COLOR.mix(0.8).filled(),
            )
        }))?
        .label("Longest Bad Streak (≥4)")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], BAD_HOLE_COLOR.filled()));

    chart.draw_series(
        good.iter()
            .chain(bad.iter())
            .filter(|&&(_, value)| value > 0.0)
            .map(|&(x, value)| {
                Text::new(
                    format!("{value:.0}"),
                    (x, value + y_max * 0.01),
                    anchored(14.0, &BLACK, VPos::Bottom),
                )
            }),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(font(14.0))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}
