use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::model::{Analysis, Trend};
use crate::view::score::types::{Bar, Direction, PlayerBars};
use crate::view::score::utils::{hex_color, player_color, short_player_name};

const REPORT_CSS: &str = r"
body { font-family: sans-serif; margin: 2em; color: #222; }
.styled-table { border-collapse: collapse; margin: 1em 0; min-width: 30em; }
.styled-table th, .styled-table td { padding: 0.4em 0.8em; border-bottom: 1px solid #ddd; text-align: left; }
.styled-table thead tr { background-color: #45B7D1; color: #fff; }
.player-bar-container { max-width: 48em; }
.bar-row { position: relative; height: 1.6em; margin: 0.2em 0 0.8em 0; }
.bar-row.even { background-color: #f7f7f7; }
.centerline { position: absolute; left: 50%; top: 0; bottom: 0; border-left: 1px dashed #888; }
.bar { position: absolute; top: 0.2em; height: 1.2em; font-size: 0.8em; color: #fff; text-align: center; }
.bar.front { background-color: #96CEB4; }
.bar.back.improving { background-color: #27AE60; }
.bar.back.declining { background-color: #E74C3C; }
.bar.back.stable { background-color: #45B7D1; }
.swatch { display: inline-block; width: 0.8em; height: 0.8em; margin-right: 0.4em; }
.refresh { color: #666; font-size: 0.9em; }
";

const NAME_WIDTH: usize = 16;

/// Lay out the front nine (left of centre) and back nine (right of centre)
/// averages so the widest bar fills its half of the row.
#[must_use]
pub fn preprocess_nine_bars(analysis: &Analysis) -> Vec<PlayerBars> {
    let widest = analysis
        .trends
        .iter()
        .flat_map(|t| [t.front_nine_average, t.back_nine_average])
        .fold(0.0, f64::max);
    let scaling_factor = if widest > 0.0 { 50.0 / widest } else { 0.0 };

    analysis
        .trends
        .iter()
        .enumerate()
        .map(|(idx, trend)| {
            let front_width = trend.front_nine_average * scaling_factor;
            let back_width = trend.back_nine_average * scaling_factor;
            PlayerBars {
                short_name: short_player_name(&trend.player_name, NAME_WIDTH),
                trend: trend.trend,
                bars: [
                    Bar {
                        average: trend.front_nine_average,
                        direction: Direction::Left,
                        start_position: 50.0 - front_width,
                        width: front_width,
                        label: "Front 9",
                    },
                    Bar {
                        average: trend.back_nine_average,
                        direction: Direction::Right,
                        start_position: 50.0,
                        width: back_width,
                        label: "Back 9",
                    },
                ],
                is_even: idx % 2 == 0,
            }
        })
        .collect()
}

fn bounce_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

#[must_use]
pub fn render_summary_table(analysis: &Analysis) -> Markup {
    html! {
        h3 { "Player Summary" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Player" }
                    th { "Total" }
                    th { "Average" }
                    th { "Best" }
                    th { "Worst" }
                    th { "Std Dev" }
                }
            }
            tbody {
                @for (idx, summary) in analysis.summaries.iter().enumerate() {
                    tr class="summary-row" {
                        td {
                            span class="swatch" style=(format!("background-color: {};", hex_color(player_color(idx)))) {}
                            (summary.player_name)
                        }
                        td { (summary.total) }
                        td { (format!("{:.2}", summary.average)) }
                        td { (summary.best) }
                        td { (summary.worst) }
                        td { (format!("{:.2}", summary.consistency)) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_rankings(analysis: &Analysis) -> Markup {
    html! {
        h3 { "Rankings" }
        table class="styled-table" {
            thead {
                tr {
                    th { "#" }
                    th { "Player" }
                    th { "Strokes" }
                }
            }
            tbody {
                @for ranked in &analysis.rankings {
                    tr class="ranking-row" {
                        td { (ranked.position) }
                        td { (ranked.player_name) }
                        td { (ranked.total) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_resilience(analysis: &Analysis) -> Markup {
    let streak_for = |name: &str| {
        analysis
            .streaks
            .iter()
            .find(|s| s.player_name == name)
            .map_or((0, 0), |s| (s.longest_good_streak, s.longest_bad_streak))
    };

    html! {
        h3 { "Streaks and Bounce-back" }
        table class="styled-table" {
            thead {
                tr {
                    th { "Player" }
                    th { "Longest good streak (≤2)" }
                    th { "Longest bad streak (≥4)" }
                    th { "After bad hole" }
                    th { "After good hole" }
                }
            }
            tbody {
                @for bounce in &analysis.bounce_back {
                    @let (good, bad) = streak_for(bounce.player_name.as_str());
                    tr {
                        td { (bounce.player_name) }
                        td { (good) }
                        td { (bad) }
                        td { (bounce_cell(bounce.after_bad)) }
                        td { (bounce_cell(bounce.after_good)) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_nine_bars(analysis: &Analysis) -> Markup {
    let player_bars = preprocess_nine_bars(analysis);

    html! {
        h3 class="playerbars" { "Front Nine vs Back Nine" }
        div class="player-bar-container" {
            @for player in &player_bars {
                @let trend_class = match player.trend {
                    Trend::Improving => "improving",
                    Trend::Declining => "declining",
                    Trend::Stable => "stable",
                };
                div class="player-label" {
                    (format!("{:<16}: {}", player.short_name, trend_class))
                }
                div class=(format!("bar-row {}", if player.is_even { "even" } else { "odd" })) {
                    div class="centerline" {}
                    @for bar in &player.bars {
                        @let bar_class = match bar.direction {
                            Direction::Left => "bar front".to_string(),
                            Direction::Right => format!("bar back {trend_class}"),
                        };
                        div class=(bar_class) title=(bar.label)
                            style=(format!("left: {:.2}%; width: {:.2}%;", bar.start_position, bar.width)) {
                            (format!("{:.2}", bar.average))
                        }
                    }
                }
            }
        }
    }
}

/// Standalone HTML page with the tables and bars for one analysis.
#[must_use]
pub fn render_html_report(analysis: &Analysis, generated_at: &str) -> Markup {
    let difficulty = &analysis.hole_difficulty;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Crazy Golf Score Analysis" }
                style { (PreEscaped(REPORT_CSS)) }
            }
            body {
                h1 { "Crazy Golf Score Analysis" }
                (render_summary_table(analysis))
                (render_rankings(analysis))
                p {
                    "Hardest hole: #" (difficulty.hardest.hole)
                    " (avg " (format!("{:.2}", difficulty.hardest.average)) "), easiest hole: #"
                    (difficulty.easiest.hole)
                    " (avg " (format!("{:.2}", difficulty.easiest.average)) ")."
                }
                (render_nine_bars(analysis))
                (render_resilience(analysis))
                p class="refresh" { "Generated " (generated_at) "." }
            }
        }
    }
}
